use crate::domain::model::VanityResult;

/// 回給來電者的候選數
pub const SUMMARY_SIZE: usize = 3;

/// 前三個候選以 `", "` 串起來，沒有候選時回傳空字串
pub fn summarize(result: &VanityResult) -> String {
    result
        .iter()
        .take(SUMMARY_SIZE)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
