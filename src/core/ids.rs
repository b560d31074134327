use crate::error::BuildError;

pub type VertexId = u32;

pub fn checked_vertex_count(vertex_count: usize) -> Result<usize, BuildError> {
    if vertex_count == 0 {
        return Err(BuildError::EmptyVertexSet);
    }
    if vertex_count - 1 > VertexId::MAX as usize {
        return Err(BuildError::TooManyVertices(vertex_count));
    }
    Ok(vertex_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rejected() {
        assert_eq!(Err(BuildError::EmptyVertexSet), checked_vertex_count(0));
    }

    #[test]
    fn test_single_vertex() {
        assert_eq!(Ok(1), checked_vertex_count(1));
    }

    #[test]
    fn test_upper_bound() {
        let max = VertexId::MAX as usize + 1;
        assert_eq!(Ok(max), checked_vertex_count(max));
        assert_eq!(
            Err(BuildError::TooManyVertices(max + 1)),
            checked_vertex_count(max + 1)
        );
    }
}
