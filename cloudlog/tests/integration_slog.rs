//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `SlogSink` hands each line to slog at the level matching its channel
//! - `Severity` serializes as its name, or its level when unnamed

#![cfg(feature = "slog")]

use std::{
    fmt::Arguments,
    sync::{Arc, Mutex},
};

use cloudlog::{DefaultLogger, Logger, Severity, slog::SlogSink};

#[derive(Clone, Default)]
struct CapturingDrain {
    records: Arc<Mutex<Vec<(slog::Level, String)>>>,
}

impl slog::Drain for CapturingDrain {
    type Ok = ();
    type Err = slog::Never;

    fn log(
        &self,
        record: &slog::Record<'_>,
        _values: &slog::OwnedKVList,
    ) -> Result<Self::Ok, Self::Err> {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.msg().to_string()));
        Ok(())
    }
}

// A serializer that keeps the last emitted value as text.
#[derive(Default)]
struct TextSerializer {
    emitted: Option<String>,
}

impl slog::Serializer for TextSerializer {
    fn emit_arguments(&mut self, _key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.emitted = Some(val.to_string());
        Ok(())
    }

    fn emit_str(&mut self, _key: slog::Key, val: &str) -> slog::Result {
        self.emitted = Some(format!("str:{val}"));
        Ok(())
    }

    fn emit_i32(&mut self, _key: slog::Key, val: i32) -> slog::Result {
        self.emitted = Some(format!("i32:{val}"));
        Ok(())
    }
}

mod sink {
    use super::*;

    #[test]
    fn forwards_lines_at_matching_levels() {
        let drain = CapturingDrain::default();
        let root = slog::Logger::root(drain.clone(), slog::o!());
        let logger = DefaultLogger::with_sink(Severity::DEFAULT, Arc::new(SlogSink::new(root)));

        logger.log_notice("n").unwrap();
        logger.log_warning("w").unwrap();
        logger.log_error("e").unwrap();

        let records = drain.records.lock().unwrap().clone();
        assert_eq!(
            records,
            vec![
                (
                    slog::Level::Info,
                    r#"{"severity":"NOTICE","message":"n"}"#.to_string()
                ),
                (
                    slog::Level::Warning,
                    r#"{"severity":"WARNING","message":"w"}"#.to_string()
                ),
                (
                    slog::Level::Error,
                    r#"{"severity":"ERROR","message":"e"}"#.to_string()
                ),
            ]
        );
    }
}

mod severity_value {
    use slog::Value as _;

    use super::*;

    fn serialize(severity: Severity) -> Option<String> {
        static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
        let mut serializer = TextSerializer::default();
        let args = format_args!("");
        let record = slog::Record::new(&RS, &args, slog::b!());
        severity
            .serialize(&record, "severity", &mut serializer)
            .unwrap();
        serializer.emitted
    }

    #[test]
    fn named_levels_emit_their_name() {
        assert_eq!(serialize(Severity::NOTICE), Some("str:NOTICE".to_string()));
    }

    #[test]
    fn unnamed_levels_emit_their_integer() {
        assert_eq!(serialize(Severity::from_level(450)), Some("i32:450".to_string()));
    }
}
