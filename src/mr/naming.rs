use std::path::PathBuf;

// intermediate file holding map task m's output for reduce task r
pub fn reduce_name(job_name: &str, map_task: usize, reduce_task: usize) -> PathBuf {
    PathBuf::from(format!("mrtmp.{}-{}-{}", job_name, map_task, reduce_task))
}

// per-reduce-task output file, picked up by the merge stage
pub fn merge_name(job_name: &str, reduce_task: usize) -> PathBuf {
    PathBuf::from(format!("mrtmp.{}-res-{}", job_name, reduce_task))
}
