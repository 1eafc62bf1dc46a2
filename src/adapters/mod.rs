//! Adapters — concrete implementations of the hexagonal port traits for
//! the host simulator.
//!
//! | Adapter        | Implements   | Connects to              |
//! |----------------|--------------|--------------------------|
//! | `config_file`  | ConfigPort   | JSON file on disk        |
//! | `log_renderer` | Renderer     | Log output, one line/frame |
//! | `log_sink`     | EventSink    | Log output               |
//! | `log_tone`     | ToneEmitter  | Log output               |
//! | `time`         | Clock, DelayNs | `std::time`, thread sleep |

pub mod config_file;
pub mod log_renderer;
pub mod log_sink;
pub mod log_tone;
pub mod time;
