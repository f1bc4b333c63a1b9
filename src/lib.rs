pub mod amount;
pub mod buffer_reader;
pub mod buffer_writer;
pub mod chronometer;
pub mod commitments;
pub mod configuration;
pub mod error;
pub mod ffi;
pub mod handles;
pub mod hex;
pub mod input;
pub mod logger;
pub mod report;
pub mod script_container;
pub mod script_output;

pub use self::{
    amount::Amount,
    buffer_reader::BufferReader,
    buffer_writer::BufferWriter,
    chronometer::Chronometer,
    commitments::PrevoutCommitments,
    configuration::{Configuration, OutputFormat},
    error::{Error, ErrorKind},
    handles::HandleTable,
    logger::{Logger, PartialLogger},
    report::report,
    script_container::ScriptContainer,
    script_output::ScriptOutput,
};
