//! Shared test utilities used across the arbor crates.
//!
//! [`tracing::RecordingLayer`] captures spans and events so instrumentation
//! can be asserted; [`profile::ProptestRunProfile`] lets CI tune property
//! suites through the environment.

pub mod profile;

pub mod tracing {
    //! Recording layer that snapshots closed spans and emitted events.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer installed by tests to capture spans and events for later
    /// assertions.
    ///
    /// Clones share the same buffers, so a test can keep one handle while the
    /// subscriber owns another.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use arbor_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Emitted events in emission order.
        ///
        /// # Examples
        /// ```
        /// use arbor_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.events().is_empty());
        /// ```
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Closed spans whose name matches `name`.
        #[must_use]
        pub fn spans_named(&self, name: &str) -> Vec<SpanRecord> {
            lock(&self.spans)
                .iter()
                .filter(|span| span.name == name)
                .cloned()
                .collect()
        }

        /// Events whose `message` field matches `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.message() == Some(message))
                .cloned()
                .collect()
        }
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        // A panicking test must not hide the records of the others.
        mutex
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation or later via `Span::record`.
        pub fields: HashMap<String, String>,
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// The formatted `message` field, if the event carried one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.fields.get("message").map(String::as_str)
        }

        /// The value recorded for `name`, if any.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    #[derive(Default)]
    struct SpanData {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut data = SpanData {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder {
                fields: &mut data.fields,
            });
            span.extensions_mut().insert(data);
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(data) = extensions.get_mut::<SpanData>() {
                values.record(&mut FieldRecorder {
                    fields: &mut data.fields,
                });
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(data) = span.extensions_mut().remove::<SpanData>() else {
                return;
            };
            lock(&self.spans).push(SpanRecord {
                name: data.name,
                fields: data.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder {
                fields: &mut fields,
            });
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a> {
        fields: &'a mut HashMap<String, String>,
    }

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.fields.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value.to_string());
        }
    }
}
