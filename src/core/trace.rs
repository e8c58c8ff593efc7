use serde::{Deserialize, Serialize};

use super::job::RawJob;

/// Assumed wall-clock length of one training iteration, in seconds.
pub const AVG_ITERATION_TIME: f64 = 0.5;

/// Networking share of an iteration, relative to `AVG_ITERATION_TIME`.
const PRETRAIN_NETWORK_FACTOR: f64 = 1.5;
const DEFAULT_NETWORK_FACTOR: f64 = 0.5;

/// Profiled network bandwidth handed to the simulator, per job type.
const PRETRAIN_PROFILED_NETWORK: u32 = 1000;
const DEFAULT_PROFILED_NETWORK: u32 = 500;

/// Tensor size used when the trace has no `mem_per_pod_GB` column.
pub const DEFAULT_TENSOR_SIZE: f64 = 5.0;

/// Column order of the converted trace, as the simulator expects it.
pub const SIM_TRACE_HEADER: [&str; 12] = [
    "job_id",
    "arrival_time",
    "num_iteration",
    "iteration_computing_time",
    "iteration_networking_time",
    "gpu_workers",
    "ps",
    "gpu_per_worker",
    "cpu_per_gpu_worker",
    "cpu_per_ps_worker",
    "tensorsizes",
    "profiled_network",
];

/// One row of the converted trace.
///
/// Field order matches [`SIM_TRACE_HEADER`]; the csv writer derives the
/// header from it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SimJob {
    pub job_id: u64,
    /// Seconds since the earliest retained submission
    pub arrival_time: f64,
    pub num_iteration: i64,
    pub iteration_computing_time: f64,
    pub iteration_networking_time: f64,
    pub gpu_workers: u32,
    /// No parameter-server support in the raw traces
    pub ps: u32,
    pub gpu_per_worker: f64,
    pub cpu_per_gpu_worker: f64,
    pub cpu_per_ps_worker: f64,
    pub tensorsizes: f64,
    pub profiled_network: u32,
}

impl SimJob {
    /// Derives the simulator fields for one retained job.
    ///
    /// `job_id` is the post-sort sequence number and `arrival_time` the
    /// offset from the earliest retained submission; both are computed by
    /// the caller. `has_mem_column` reflects the source header, not the
    /// individual cell.
    ///
    /// Divisions are not guarded: a zero `duration` or `node_num` yields a
    /// non-finite value that is written out as-is.
    pub fn derive(job_id: u64, arrival_time: f64, job: &RawJob, has_mem_column: bool) -> Self {
        let network_factor = if job.is_pretrain() {
            PRETRAIN_NETWORK_FACTOR
        } else {
            DEFAULT_NETWORK_FACTOR
        };
        let gpu_utilization = job.gpu_time / (f64::from(job.gpu_num) * job.duration);
        let cpu_per_gpu = f64::from(job.cpu_num) / f64::from(job.gpu_num);
        let tensorsizes = if has_mem_column {
            job.mem_per_pod_gb
                .map_or(DEFAULT_TENSOR_SIZE, |mem| mem / 100.0)
        } else {
            DEFAULT_TENSOR_SIZE
        };

        SimJob {
            job_id,
            arrival_time,
            num_iteration: (job.duration / AVG_ITERATION_TIME) as i64,
            iteration_computing_time: gpu_utilization * AVG_ITERATION_TIME,
            iteration_networking_time: AVG_ITERATION_TIME * network_factor,
            gpu_workers: job.node_num,
            ps: 0,
            gpu_per_worker: f64::from(job.gpu_num) / f64::from(job.node_num),
            cpu_per_gpu_worker: cpu_per_gpu,
            cpu_per_ps_worker: cpu_per_gpu,
            tensorsizes,
            profiled_network: if job.is_pretrain() {
                PRETRAIN_PROFILED_NETWORK
            } else {
                DEFAULT_PROFILED_NETWORK
            },
        }
    }
}
