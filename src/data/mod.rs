/// Data layer: dialect sniffing, parsing, and display classification.
///
/// Architecture:
/// ```text
///  file.csv / .tsv / .txt
///        │
///        ▼
///   ┌──────────┐   first line → separator + header?
///   │ dialect   │
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   tokenizer + numeric → ParsedTable
///   │  table    │   (Graph + valid samples)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   fold per file, finish once:
///   │  model    │   named / logarithmic / densest series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐   line or markers per series
///   │ classify  │
///   └──────────┘
/// ```

pub mod classify;
pub mod dialect;
pub mod error;
pub mod loader;
pub mod model;
pub mod numeric;
pub mod table;
pub mod tokenizer;
