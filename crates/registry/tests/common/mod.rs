//! Shared fixtures for registry integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use openum_registry::{StandardProvider, StandardTable, StaticProvider};
use parking_lot::Mutex;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::{Context, SubscriberExt};

pub const STANDARD: &[StandardTable] = &[
	("Material", &[("Plastic", 256), ("Wood", 512), ("Slate", 800)]),
	("SortOrder", &[("Name", 0), ("Custom", 1), ("LayoutOrder", 2)]),
];

pub fn standard() -> Arc<dyn StandardProvider> {
	Arc::new(StaticProvider::from_tables(STANDARD).expect("standard tables are valid"))
}

/// Captured log event.
#[derive(Debug, Clone)]
pub struct LogEntry {
	pub level: Level,
	pub target: String,
	pub message: String,
	pub enum_name: Option<String>,
	pub kind: Option<String>,
}

/// Tracing layer that records every event.
#[derive(Clone, Default)]
pub struct CaptureLayer {
	entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLayer {
	pub fn entries(&self) -> Vec<LogEntry> {
		self.entries.lock().clone()
	}

	/// Events at `WARN` on the given target.
	pub fn warnings(&self, target: &str) -> Vec<LogEntry> {
		self.entries()
			.into_iter()
			.filter(|e| e.level == Level::WARN && e.target == target)
			.collect()
	}
}

impl<S> Layer<S> for CaptureLayer
where
	S: Subscriber,
{
	fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
		let metadata = event.metadata();
		let mut entry = LogEntry {
			level: *metadata.level(),
			target: metadata.target().to_string(),
			message: String::new(),
			enum_name: None,
			kind: None,
		};
		event.record(&mut EntryVisitor(&mut entry));
		self.entries.lock().push(entry);
	}
}

struct EntryVisitor<'a>(&'a mut LogEntry);

impl Visit for EntryVisitor<'_> {
	fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
		if field.name() == "message" {
			self.0.message = format!("{value:?}");
		}
	}

	fn record_str(&mut self, field: &Field, value: &str) {
		match field.name() {
			"message" => self.0.message = value.to_string(),
			"enum_name" => self.0.enum_name = Some(value.to_string()),
			"kind" => self.0.kind = Some(value.to_string()),
			_ => {}
		}
	}
}

/// Runs `f` with a capturing subscriber installed on this thread.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, CaptureLayer) {
	let layer = CaptureLayer::default();
	let subscriber = tracing_subscriber::registry().with(layer.clone());
	let result = tracing::subscriber::with_default(subscriber, f);
	(result, layer)
}
