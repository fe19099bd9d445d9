use anyhow::{Context, Result};
use tracing::debug;

use cronexpand_core::{AppConfig, CronResult, CronSchedule, FieldDefinition};
use cronexpand_parser::{expand_schedule, ParserRegistry};

/// 应用实例
///
/// 字段定义表和解析器注册表在启动时构建一次, 之后只读。
pub struct Application {
    definitions: Vec<FieldDefinition>,
    registry: ParserRegistry,
}

impl Application {
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate().context("配置校验失败")?;

        let definitions =
            FieldDefinition::standard_fields().context("构建标准字段定义失败")?;
        let registry = ParserRegistry::new();

        debug!(fields = definitions.len(), "应用初始化完成");

        Ok(Self {
            definitions,
            registry,
        })
    }

    /// 展开一个完整的CRON输入
    pub fn expand(&self, input: &str) -> CronResult<CronSchedule> {
        expand_schedule(input, &self.definitions, &self.registry)
    }
}
