use std::collections::HashMap;

use cronexpand_core::{CronError, CronResult, ExpressionKind};

/// 字段表达式解析器
///
/// 每个实现识别一种取值语法, 将Token在 [begin, end] 边界内展开为具体取值。
/// 解析失败通过Err返回, 不用于控制流以外的任何用途。
pub trait ExpressionParser: Send + Sync {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>>;
}

/// 解析纯数字Token, 拒绝符号和空串
fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// 从begin开始按step递增, 展开到不超过end的最后一个值
fn expand_values(begin: u32, end: u32, step: u32) -> Vec<u32> {
    (begin..=end).step_by(step as usize).collect()
}

/// 通配符表达式: `*` 展开为整个取值范围
pub struct WildcardParser;

impl ExpressionParser for WildcardParser {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>> {
        if token != "*" {
            return Err(CronError::UnableToParse(token.to_string()));
        }

        Ok(expand_values(begin, end, 1))
    }
}

/// 区间表达式: `a-b` 展开为 [a, b] 闭区间
///
/// 起始值校验落在字段边界内; 结束值只校验不超过上界。
pub struct RangeParser;

impl ExpressionParser for RangeParser {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>> {
        let (raw_begin, raw_end) = token
            .split_once('-')
            .ok_or_else(|| CronError::UnableToParse(token.to_string()))?;

        let provided_begin = parse_number(raw_begin)
            .ok_or_else(|| CronError::UnableToParse(token.to_string()))?;
        if provided_begin < begin || end < provided_begin {
            return Err(CronError::ValueOutOfBounds {
                value: provided_begin,
                begin,
                end,
            });
        }

        let provided_end =
            parse_number(raw_end).ok_or_else(|| CronError::UnableToParse(token.to_string()))?;
        if end < provided_end {
            return Err(CronError::ValueOutOfBounds {
                value: provided_end,
                begin,
                end,
            });
        }

        if provided_end < provided_begin {
            return Err(CronError::InvertedRange {
                begin: provided_begin,
                end: provided_end,
            });
        }

        Ok(expand_values(provided_begin, provided_end, 1))
    }
}

/// 步长表达式: `*/n` 从下界开始按n递增展开
///
/// 步长0会导致无限循环, 作为解析错误拒绝。
pub struct StepParser;

impl ExpressionParser for StepParser {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>> {
        let raw_step = token
            .strip_prefix("*/")
            .ok_or_else(|| CronError::UnableToParse(token.to_string()))?;

        let step =
            parse_number(raw_step).ok_or_else(|| CronError::UnableToParse(token.to_string()))?;
        if step == 0 {
            return Err(CronError::InvalidStep(token.to_string()));
        }

        Ok(expand_values(begin, end, step))
    }
}

/// 单值表达式: 一个数字, 校验落在字段边界内
pub struct ValueParser;

impl ExpressionParser for ValueParser {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>> {
        let value =
            parse_number(token).ok_or_else(|| CronError::UnableToParse(token.to_string()))?;

        if value < begin || end < value {
            return Err(CronError::ValueOutOfBounds { value, begin, end });
        }

        Ok(vec![value])
    }
}

/// 枚举表达式: `a,b,c` 至少两个成员, 保持输入顺序, 不排序不去重
pub struct EnumerationParser;

impl ExpressionParser for EnumerationParser {
    fn parse(&self, token: &str, begin: u32, end: u32) -> CronResult<Vec<u32>> {
        let parts: Vec<&str> = token.split(',').collect();

        if parts.len() < 2 {
            return Err(CronError::UnableToParse(token.to_string()));
        }

        let mut values = Vec::with_capacity(parts.len());
        for part in parts {
            let value = parse_number(part)
                .ok_or_else(|| CronError::UnableToParse(token.to_string()))?;
            if value < begin || end < value {
                return Err(CronError::UnableToParse(token.to_string()));
            }
            values.push(value);
        }

        Ok(values)
    }
}

/// 解析器注册表
///
/// 启动时构建一次, 之后只读, 可安全地被并发读取。
pub struct ParserRegistry {
    parsers: HashMap<ExpressionKind, Box<dyn ExpressionParser>>,
}

impl ParserRegistry {
    /// 注册全部五种表达式解析器
    pub fn new() -> Self {
        let mut parsers: HashMap<ExpressionKind, Box<dyn ExpressionParser>> = HashMap::new();
        parsers.insert(ExpressionKind::Wildcard, Box::new(WildcardParser));
        parsers.insert(ExpressionKind::Range, Box::new(RangeParser));
        parsers.insert(ExpressionKind::Step, Box::new(StepParser));
        parsers.insert(ExpressionKind::Value, Box::new(ValueParser));
        parsers.insert(ExpressionKind::Enumeration, Box::new(EnumerationParser));

        Self { parsers }
    }

    pub fn get(&self, kind: ExpressionKind) -> Option<&dyn ExpressionParser> {
        self.parsers.get(&kind).map(|parser| parser.as_ref())
    }

    /// 空注册表
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
