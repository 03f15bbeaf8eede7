// Run orchestration — search, fetch, analyze, generate.

pub mod outline;
