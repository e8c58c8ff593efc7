use serde::Deserialize;
use std::str::FromStr;
use strum::{Display, EnumString};

/// Job categories recorded in the raw cluster traces.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Display, EnumString)]
pub enum JobType {
    #[strum(to_string = "Pretrain")]
    Pretrain,
    #[strum(to_string = "SFT")]
    Sft,
    #[strum(to_string = "Evaluation")]
    Evaluation,
    #[strum(to_string = "Debug")]
    Debug,
    #[strum(to_string = "Other")]
    Other,
}

impl JobType {
    /// Categories the converter retains. Evaluation and Debug jobs are
    /// dropped along with anything the trace spells differently.
    pub fn is_convertible(self) -> bool {
        matches!(self, JobType::Pretrain | JobType::Other | JobType::Sft)
    }
}

/// Completion states recorded in the raw cluster traces.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Display, EnumString)]
pub enum JobState {
    #[strum(to_string = "COMPLETED")]
    Completed,
    #[strum(to_string = "FAILED")]
    Failed,
    #[strum(to_string = "CANCELLED")]
    Cancelled,
}

/// One row of a raw cluster trace.
///
/// Columns the converter does not use are ignored on deserialization;
/// `mem_per_pod_GB` is the one column that is genuinely optional across
/// trace sources.
#[derive(Debug, Deserialize, Clone)]
pub struct RawJob {
    pub gpu_num: u32,
    #[serde(rename = "type")]
    pub job_type: String,
    pub state: String,
    pub submit_time: String,
    /// Wall-clock runtime in seconds
    pub duration: f64,
    /// GPU-seconds consumed over the whole run
    pub gpu_time: f64,
    pub node_num: u32,
    pub cpu_num: u32,
    #[serde(rename = "mem_per_pod_GB", default)]
    pub mem_per_pod_gb: Option<f64>,
}

impl RawJob {
    /// Filter predicate applied before conversion: GPU jobs of an
    /// allow-listed type that ran to completion.
    pub fn is_convertible(&self) -> bool {
        self.gpu_num > 0
            && JobType::from_str(&self.job_type).is_ok_and(JobType::is_convertible)
            && matches!(JobState::from_str(&self.state), Ok(JobState::Completed))
    }

    pub fn is_pretrain(&self) -> bool {
        matches!(JobType::from_str(&self.job_type), Ok(JobType::Pretrain))
    }
}
