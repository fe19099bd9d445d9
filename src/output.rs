use anyhow::{Context, Result};

use cronexpand_core::{CronSchedule, OutputFormat};

/// 渲染展开结果
pub fn render(schedule: &CronSchedule, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_table(&schedule.rows())),
        OutputFormat::Json => {
            serde_json::to_string_pretty(schedule).context("序列化展开结果失败")
        }
    }
}

/// 两列对齐的文本表格: 标签列按最长标签补齐
fn render_table(rows: &[(String, String)]) -> String {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);

    let mut table = String::new();
    for (i, (label, value)) in rows.iter().enumerate() {
        if i != 0 {
            table.push('\n');
        }
        table.push_str(&format!("{label:<label_width$} {value}"));
    }

    table
}
