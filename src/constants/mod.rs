pub mod failure_patterns;
