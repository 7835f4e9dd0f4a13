use storage::{
    dto::summary::SessionSummary, models::DataSnapshot, services::summary::session_summary,
};

pub fn summarize(snapshot: &DataSnapshot) -> SessionSummary {
    session_summary(&snapshot.players, &snapshot.scores)
}
