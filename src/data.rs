use ndarray::Array1;

/// Input fields fit in `u32`; sums over a schedule are kept in `u64`.
pub type Time = u64;

/// Index of a job inside an `Instance` (0-based). The id reported to users is `job + 1`.
pub type JobId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
  pub n_jobs: usize,

  pub release: Array1<Time>,
  pub processing: Array1<Time>,
  pub delivery: Array1<Time>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
  pub order: Vec<JobId>,
}

impl Instance {
  pub fn new(jobs: &[(Time, Time, Time)]) -> Self {
    return Instance {
      n_jobs: jobs.len(),
      release: jobs.iter().map(|&(r, _, _)| r).collect(),
      processing: jobs.iter().map(|&(_, p, _)| p).collect(),
      delivery: jobs.iter().map(|&(_, _, q)| q).collect(),
    };
  }

  pub fn job_ids(&self) -> Vec<JobId> {
    return (0..self.n_jobs).collect();
  }

  pub fn external_id(&self, job: JobId) -> usize {
    return job + 1;
  }

  pub fn is_empty(&self) -> bool {
    return self.n_jobs == 0;
  }
}

impl Schedule {
  pub fn new(order: Vec<JobId>) -> Self {
    return Schedule { order: order };
  }

  pub fn empty() -> Self {
    return Schedule { order: Vec::new() };
  }

  pub fn len(&self) -> usize {
    return self.order.len();
  }

  pub fn is_empty(&self) -> bool {
    return self.order.is_empty();
  }

  /// 1-based ids in processing order.
  pub fn ids(&self, inst: &Instance) -> Vec<usize> {
    return self.order.iter().map(|&j| inst.external_id(j)).collect();
  }
}
