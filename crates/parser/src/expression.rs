use tracing::debug;

use cronexpand_core::{
    CronError, CronExpression, CronField, CronResult, CronSchedule, FieldDefinition,
};

use crate::parsers::ParserRegistry;

/// 按声明顺序尝试字段允许的每种表达式类型, 首个成功者胜出
///
/// 某类型没有注册解析器属于配置错误, 立即返回。
/// 全部类型都失败时丢弃各解析器的具体诊断, 返回字段级的统一错误。
pub fn resolve_field(
    registry: &ParserRegistry,
    definition: &FieldDefinition,
    token: &str,
) -> CronResult<CronField> {
    for kind in definition.allowed_expressions() {
        let parser = registry.get(*kind).ok_or_else(|| {
            CronError::Configuration(format!("表达式类型 '{kind}' 没有注册解析器"))
        })?;

        if let Ok(values) = parser.parse(token, definition.begin(), definition.end()) {
            debug!(
                field = definition.name(),
                kind = %kind,
                "字段解析成功: {token}"
            );
            return Ok(CronField::new(definition.name(), values));
        }
    }

    Err(CronError::FieldUnparsed {
        field: definition.name().to_string(),
    })
}

/// 按空白切分输入, Token数量必须与期望值完全一致
pub fn split_tokens(input: &str, expected: usize) -> CronResult<Vec<&str>> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    if tokens.len() != expected {
        return Err(CronError::TokenCountMismatch {
            expected,
            got: tokens.len(),
        });
    }

    Ok(tokens)
}

/// 将Token与字段定义按位置逐一解析, 首个失败即中止
pub fn assemble_expression(
    registry: &ParserRegistry,
    tokens: &[&str],
    definitions: &[FieldDefinition],
) -> CronResult<CronExpression> {
    if tokens.len() != definitions.len() {
        return Err(CronError::TokenCountMismatch {
            expected: definitions.len(),
            got: tokens.len(),
        });
    }

    let fields = definitions
        .iter()
        .zip(tokens)
        .map(|(definition, token)| resolve_field(registry, definition, token))
        .collect::<CronResult<Vec<CronField>>>()?;

    Ok(CronExpression::new(fields))
}

/// 展开完整的CRON输入: 五个字段Token加一个命令Token
///
/// 命令Token原样保留, 不作为字段解析。
pub fn expand_schedule(
    input: &str,
    definitions: &[FieldDefinition],
    registry: &ParserRegistry,
) -> CronResult<CronSchedule> {
    let tokens = split_tokens(input, definitions.len() + 1)?;

    let expression = assemble_expression(registry, &tokens[..definitions.len()], definitions)?;
    let command = tokens[tokens.len() - 1].to_string();

    debug!(fields = definitions.len(), command = %command, "CRON表达式展开完成");

    Ok(CronSchedule {
        expression,
        command,
    })
}
