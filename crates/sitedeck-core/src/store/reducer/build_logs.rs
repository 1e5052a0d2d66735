use crate::store::action::Action;
use crate::store::reducer::{settle_existing, with_entry};
use crate::store::state::{BuildLog, KeyedSlice, SliceState};

pub fn reduce(state: KeyedSlice<BuildLog>, action: &Action) -> KeyedSlice<BuildLog> {
    match action {
        Action::BuildLogsFetchStarted { build_id } => with_entry(state, *build_id, |entry| {
            SliceState::loading(entry.data)
        }),
        Action::BuildLogsReceived { build_id, chunk } => with_entry(state, *build_id, |entry| {
            let mut log = entry.data;
            log.lines.extend(chunk.output.iter().cloned());
            log.offset = chunk.offset + chunk.output.len() as u64;
            log.state = Some(chunk.state);
            SliceState::loaded(log)
        }),
        Action::HttpError { key, .. } => settle_existing(state, *key),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedeck_api::{BuildLogChunk, BuildState};

    fn chunk(offset: u64, lines: &[&str], state: BuildState) -> BuildLogChunk {
        BuildLogChunk {
            state,
            offset,
            output: lines.iter().map(|&l| l.to_owned()).collect(),
        }
    }

    #[test]
    fn chunks_accumulate_and_advance_offset() {
        let state = reduce(KeyedSlice::default(), &Action::BuildLogsFetchStarted { build_id: 7 });
        assert!(state[&7].is_loading);

        let state = reduce(
            state,
            &Action::BuildLogsReceived {
                build_id: 7,
                chunk: chunk(0, &["a", "b"], BuildState::Processing),
            },
        );
        let state = reduce(
            state,
            &Action::BuildLogsReceived {
                build_id: 7,
                chunk: chunk(2, &["c"], BuildState::Success),
            },
        );

        let log = &state[&7];
        assert!(!log.is_loading);
        assert_eq!(log.data.lines, ["a", "b", "c"]);
        assert_eq!(log.data.offset, 3);
        assert_eq!(log.data.state, Some(BuildState::Success));
    }

    #[test]
    fn error_never_creates_an_entry() {
        let state = reduce(
            KeyedSlice::default(),
            &Action::HttpError {
                message: "nope".into(),
                key: Some(7),
            },
        );
        assert!(state.is_empty());
    }
}
