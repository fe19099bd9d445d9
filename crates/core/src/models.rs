use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CronError, CronResult};

/// 表达式类型
///
/// 每种类型对应一种字段取值语法, 作为解析器注册表的键使用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpressionKind {
    Wildcard,
    Range,
    Step,
    Value,
    Enumeration,
}

impl ExpressionKind {
    /// 默认的解析优先级顺序 (先匹配者优先)
    pub fn precedence_order() -> Vec<ExpressionKind> {
        vec![
            ExpressionKind::Wildcard,
            ExpressionKind::Range,
            ExpressionKind::Step,
            ExpressionKind::Value,
            ExpressionKind::Enumeration,
        ]
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpressionKind::Wildcard => "wildcard",
            ExpressionKind::Range => "range",
            ExpressionKind::Step => "step",
            ExpressionKind::Value => "value",
            ExpressionKind::Enumeration => "enumeration",
        };
        f.write_str(name)
    }
}

/// 字段定义
///
/// 描述一个CRON字段的名称、取值边界和允许的表达式类型。
/// 启动时构建一次, 之后只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    name: String,
    begin: u32,
    end: u32,
    allowed_expressions: Vec<ExpressionKind>,
}

impl FieldDefinition {
    /// 创建字段定义, 校验边界和表达式列表
    pub fn new(
        name: &str,
        begin: u32,
        end: u32,
        allowed_expressions: Vec<ExpressionKind>,
    ) -> CronResult<Self> {
        if end < begin {
            return Err(CronError::Configuration(format!(
                "字段 '{name}' 创建失败: 起始值 {begin} 大于结束值 {end}"
            )));
        }

        if allowed_expressions.is_empty() {
            return Err(CronError::Configuration(format!(
                "字段 '{name}' 创建失败: 未提供允许的表达式类型"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            begin,
            end,
            allowed_expressions,
        })
    }

    /// 标准的五个CRON字段定义, 按字段顺序排列
    pub fn standard_fields() -> CronResult<Vec<FieldDefinition>> {
        let order = ExpressionKind::precedence_order;
        Ok(vec![
            Self::new("minute", 0, 59, order())?,
            Self::new("hour", 0, 23, order())?,
            Self::new("day of month", 1, 31, order())?,
            Self::new("month", 1, 12, order())?,
            Self::new("day of week", 1, 7, order())?,
        ])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn allowed_expressions(&self) -> &[ExpressionKind] {
        &self.allowed_expressions
    }
}

/// 已解析的CRON字段: 字段名和展开后的具体取值
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronField {
    name: String,
    values: Vec<u32>,
}

impl CronField {
    pub fn new(name: &str, values: Vec<u32>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }
}

impl fmt::Display for CronField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// 完整的CRON表达式: 每个字段定义对应一个已解析字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronExpression {
    fields: Vec<CronField>,
}

impl CronExpression {
    pub fn new(fields: Vec<CronField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[CronField] {
        &self.fields
    }
}

/// 展开结果: CRON表达式加上原样保留的命令Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CronSchedule {
    pub expression: CronExpression,
    pub command: String,
}

impl CronSchedule {
    /// 输出 (标签, 取值) 行: 五个字段行后跟一个command行
    pub fn rows(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = self
            .expression
            .fields()
            .iter()
            .map(|field| (field.name().to_string(), field.to_string()))
            .collect();

        rows.push(("command".to_string(), self.command.clone()));
        rows
    }
}
