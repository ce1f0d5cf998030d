use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("factorial({n}) overflows a 64-bit unsigned integer")]
    FactorialOverflow { n: u64 },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
