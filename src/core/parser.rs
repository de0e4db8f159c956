use crate::core::dial_pad::KeypadDigit;
use crate::utils::error::{Result, VanityError};

const AREA_CODE_LEN: usize = 3;
const SUBSCRIBER_LEN: usize = 7;
const FIRST_GROUP_LEN: usize = 3;

/// 驗證過的號碼：區碼加上 7 位 (2-9) 的用戶號碼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    area_code: String,
    subscriber: Vec<KeypadDigit>,
}

impl ParsedNumber {
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// 用戶號碼的前 3 位
    pub fn first_group(&self) -> &[KeypadDigit] {
        &self.subscriber[..FIRST_GROUP_LEN]
    }

    /// 用戶號碼的後 4 位
    pub fn second_group(&self) -> &[KeypadDigit] {
        &self.subscriber[FIRST_GROUP_LEN..]
    }

    /// 前 3 位的原始數字，給找不到 3 字母單字時使用
    pub fn first_group_digits(&self) -> String {
        self.first_group().iter().map(|d| d.as_char()).collect()
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')')
}

fn invalid(raw: &str, reason: impl Into<String>) -> VanityError {
    VanityError::InvalidNumber {
        number: raw.to_string(),
        reason: reason.into(),
    }
}

/// 解析 `+1 207 284-5367`、`12072845367` 或 `2072845367` 這類號碼
pub fn parse_phone_number(raw: &str) -> Result<ParsedNumber> {
    let trimmed = raw.trim();
    let unprefixed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unprefixed.chars().filter(|c| !is_separator(*c)).collect();

    if digits.is_empty() {
        return Err(invalid(raw, "phone number is empty"));
    }

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(raw, "phone number contains non-digit characters"));
    }

    // 11 位時第一位是國碼，直接丟掉
    let national = match digits.len() {
        n if n == 1 + AREA_CODE_LEN + SUBSCRIBER_LEN => &digits[1..],
        n if n == AREA_CODE_LEN + SUBSCRIBER_LEN => digits.as_str(),
        n => {
            return Err(invalid(
                raw,
                format!("expected 10 or 11 digits, found {}", n),
            ))
        }
    };

    let (area_code, subscriber) = national.split_at(AREA_CODE_LEN);

    let subscriber = subscriber
        .chars()
        .map(KeypadDigit::new)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            tracing::warn!("Rejected {}: subscriber digits include 0 or 1", raw);
            invalid(raw, "subscriber number cannot contain 0 or 1")
        })?;

    Ok(ParsedNumber {
        area_code: area_code.to_string(),
        subscriber,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_e164_number() {
        let number = parse_phone_number("+12072845367").unwrap();
        assert_eq!(number.area_code(), "207");
        assert_eq!(number.first_group_digits(), "284");
        let rest: String = number.second_group().iter().map(|d| d.as_char()).collect();
        assert_eq!(rest, "5367");
    }

    #[test]
    fn test_parse_strips_separators() {
        let plain = parse_phone_number("12072845367").unwrap();
        assert_eq!(parse_phone_number("+1 207 284-5367").unwrap(), plain);
        assert_eq!(parse_phone_number("1 (207) 284.5367").unwrap(), plain);
        assert_eq!(parse_phone_number("  +1-207-284-5367 ").unwrap(), plain);
    }

    #[test]
    fn test_parse_ten_digit_number() {
        let number = parse_phone_number("2072845367").unwrap();
        assert_eq!(number.area_code(), "207");
        assert_eq!(number.first_group().len(), 3);
        assert_eq!(number.second_group().len(), 4);
    }

    #[test]
    fn test_area_code_may_contain_zero_and_one() {
        let number = parse_phone_number("+11012845367").unwrap();
        assert_eq!(number.area_code(), "101");
    }

    #[test]
    fn test_reject_zero_or_one_in_subscriber() {
        for raw in ["+12072845317", "+12070845367", "+12072845361"] {
            let err = parse_phone_number(raw).unwrap_err();
            assert!(err.is_invalid_number(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_reject_malformed_input() {
        assert!(parse_phone_number("").unwrap_err().is_invalid_number());
        assert!(parse_phone_number("+1207ABC5367").unwrap_err().is_invalid_number());
        assert!(parse_phone_number("+120728453").unwrap_err().is_invalid_number());
        assert!(parse_phone_number("+120728453678").unwrap_err().is_invalid_number());
    }
}
