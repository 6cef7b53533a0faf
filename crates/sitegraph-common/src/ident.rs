//! Deterministic node identifier derivation
//!
//! Node identifiers are a pure function of (type name, backend record id).
//! Both the node emitter and the reference resolver go through [`node_id`],
//! so a link written for a record always matches the identifier the record
//! is later committed under, regardless of emission order.

use uuid::Uuid;

/// Fixed namespace for sitegraph node identifiers.
///
/// Changing this value changes every derived id, which breaks links against
/// nodes emitted by earlier releases. Do not change it.
const NODE_NAMESPACE: Uuid = Uuid::from_u128(0x7a0c_53d1_9b4e_4f6a_8d2e_03c1_55aa_90e4);

/// Derive the stable node identifier for a record of the given type.
///
/// The identifier is a UUID v5 over `"{type_name}-{record_id}"`, so computing
/// it twice for the same inputs always yields the same id.
pub fn node_id(type_name: &str, record_id: &str) -> String {
    let name = format!("{}-{}", type_name, record_id);
    Uuid::new_v5(&NODE_NAMESPACE, name.as_bytes())
        .hyphenated()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_deterministic() {
        let a = node_id("BlogPost", "abc123");
        let b = node_id("BlogPost", "abc123");
        assert_eq!(a, b);
    }

    #[test]
    fn test_node_id_distinct_inputs() {
        assert_ne!(node_id("BlogPost", "abc123"), node_id("BlogPost", "abc124"));
        assert_ne!(node_id("BlogPost", "abc123"), node_id("BlogAuthor", "abc123"));
    }

    #[test]
    fn test_node_id_separator_is_part_of_name() {
        // "Blog" + "Post-1" and "BlogPost" + "1" must not collide even though
        // the concatenated strings look alike
        assert_ne!(node_id("Blog", "Post-1"), node_id("BlogPost", "1"));
    }

    #[test]
    fn test_node_id_is_hyphenated_uuid() {
        let id = node_id("MediaItem", "M1");
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
