/// The shared record threaded through a pipeline.
///
/// A record is the single piece of state a pipeline owns during a run.
/// Steps never mutate it directly; each step returns a partial
/// [`Record::Update`] and the executor merges it via [`Record::apply`]
/// before invoking the next step. Implementations define which fields
/// an update may touch, so field ownership is enforced at the type
/// level rather than by convention.
///
/// # Examples
///
/// ```
/// use mailsift::Record;
///
/// #[derive(Debug, Default)]
/// struct Report {
///     summary: Option<String>,
/// }
///
/// #[derive(Debug, Default)]
/// struct ReportUpdate {
///     summary: Option<String>,
/// }
///
/// impl Record for Report {
///     type Update = ReportUpdate;
///
///     fn apply(&mut self, update: ReportUpdate) {
///         if let Some(summary) = update.summary {
///             self.summary = Some(summary);
///         }
///     }
/// }
/// ```
pub trait Record: Send + Sync + 'static {
    /// The partial update produced by a step.
    type Update: Send;

    /// Merges a partial update into the record.
    ///
    /// Only the fields the update populates may be written; everything
    /// else must be left untouched.
    fn apply(&mut self, update: Self::Update);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Tally {
        count: u32,
        label: Option<String>,
    }

    struct TallyUpdate {
        count: u32,
        label: Option<String>,
    }

    impl Record for Tally {
        type Update = TallyUpdate;

        fn apply(&mut self, update: TallyUpdate) {
            self.count += update.count;
            if let Some(label) = update.label {
                self.label = Some(label);
            }
        }
    }

    #[test]
    fn test_apply_merges_populated_fields() {
        let mut tally = Tally::default();

        tally.apply(TallyUpdate {
            count: 2,
            label: Some("first".to_string()),
        });
        assert_eq!(tally.count, 2);
        assert_eq!(tally.label.as_deref(), Some("first"));
    }

    #[test]
    fn test_apply_leaves_unpopulated_fields_alone() {
        let mut tally = Tally {
            count: 1,
            label: Some("kept".to_string()),
        };

        tally.apply(TallyUpdate {
            count: 1,
            label: None,
        });
        assert_eq!(tally.count, 2);
        assert_eq!(tally.label.as_deref(), Some("kept"));
    }
}
