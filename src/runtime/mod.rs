//! Runtime backends for kernel dispatch
//!
//! ```text
//! CpuClient (execution context)
//! ├── ParallelismConfig (threads, chunk size, reduction order)
//! ├── ops traits        (safe slice API, length checked)
//! └── kernels           (raw pointers, trust the caller)
//! ```

pub mod cpu;
