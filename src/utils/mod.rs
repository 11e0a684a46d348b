pub(crate) mod date;
pub(crate) mod logging;
pub(crate) mod prompt;
pub(crate) mod timezone;

pub(crate) use date::{parse_date, parse_time};
pub(crate) use logging::init_logging;
pub(crate) use prompt::{confirm, stdin_is_interactive};
pub(crate) use timezone::Timezone;
