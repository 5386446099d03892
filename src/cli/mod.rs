pub mod output;

pub const USAGE: &str = "Usage: classfinder <filename> '<pattern>'";
