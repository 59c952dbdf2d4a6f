use scc_api::VertexId;

#[derive(Debug)]
pub enum SccError {
    Generic(String),
    ReadFile(String, String),
    CreateFile(String, String),
    WriteFile(String, String),
    LoadGraph(String),
    NotDirectory(String),
    VertexOutOfRange(VertexId, usize),
    AlreadyRun(&'static str),
    InvalidPartition(&'static str, String),
    ResultsMismatch(&'static str, &'static str),
}

impl std::fmt::Display for SccError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SccError::Generic(msg) => write!(f, "[SccError] {}", msg)?,
            SccError::ReadFile(file_path, e) => {
                write!(f, "[IOError] Could not open file '{}' for reading: {}", file_path, e)?;
            }
            SccError::CreateFile(file_path, e) => {
                write!(f, "[IOError] Could not create file '{}' for writing: {}", file_path, e)?;
            }
            SccError::WriteFile(file_path, e) => {
                write!(f, "[IOError] Could not write to '{}': {}", file_path, e)?;
            }
            SccError::LoadGraph(message) => write!(f, "[LoadGraphError] {}", message)?,
            SccError::NotDirectory(path) => {
                write!(f, "[LoadGraphError] Invalid graph directory: '{}'", path)?;
            }
            SccError::VertexOutOfRange(vertex_id, vertex_count) => write!(
                f,
                "[GraphError] Vertex id {} is out of range for a graph with {} vertices",
                vertex_id, vertex_count
            )?,
            SccError::AlreadyRun(engine) => {
                write!(f, "[EngineError] {} has already been run on this graph", engine)?;
            }
            SccError::InvalidPartition(engine, message) => {
                write!(f, "[EngineError] {} produced an invalid partition: {}", engine, message)?;
            }
            SccError::ResultsMismatch(left, right) => {
                write!(f, "[EngineError] Components of {} and {} do not match", left, right)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for SccError {}

pub fn generic_error(message: String) -> SccError {
    SccError::Generic(message)
}

pub fn load_graph_error(message: String) -> SccError {
    SccError::LoadGraph(message)
}

#[cfg(test)]
mod tests {
    use crate::error::SccError;

    #[test]
    fn display_messages() {
        let inputs = vec![
            (SccError::AlreadyRun("Tarjan"), "[EngineError] Tarjan has already been run on this graph"),
            (
                SccError::VertexOutOfRange(7, 4),
                "[GraphError] Vertex id 7 is out of range for a graph with 4 vertices",
            ),
            (
                SccError::ResultsMismatch("Gabow", "KS"),
                "[EngineError] Components of Gabow and KS do not match",
            ),
            (SccError::LoadGraph("bad line".to_string()), "[LoadGraphError] bad line"),
        ];
        for (error, expected) in inputs {
            assert_eq!(error.to_string(), expected);
        }
    }
}
