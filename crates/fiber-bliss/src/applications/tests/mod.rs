mod common;
mod samples;
