mod block;
mod galois;

pub use block::interleaved_codewords;
