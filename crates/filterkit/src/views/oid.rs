use crate::builder::FilterBuilder;
use crate::condition::Condition;
use crate::error::Result;
use crate::object_id::ObjectId;
use crate::op::Op;

/// Identifier condition view.
///
/// Written to the builder's configured id key (`_id` by default) unless
/// started with [`FilterBuilder::oid_at`].
#[derive(Debug)]
pub struct OidCond<'a> {
    cond: Condition<'a>,
}

impl<'a> OidCond<'a> {
    pub(crate) fn new(cond: Condition<'a>) -> Self {
        OidCond { cond }
    }

    /// Parses `oid` as hex and adds `$eq`.
    ///
    /// Malformed text is rejected without writing anything, so it can never
    /// compile into a filter that matches everything or nothing.
    pub fn eq(mut self, oid: &str) -> Result<&'a mut FilterBuilder> {
        let id = ObjectId::parse_str(oid)?;
        self.cond.set(Op::Eq, id);
        Ok(self.cond.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;
    use crate::error::FilterError;
    use serde_json::json;

    const HEX: &str = "5f1a2b3c4d5e6f7a8b9c0d1e";

    #[test]
    fn default_key() -> Result<()> {
        let mut builder = FilterBuilder::new();
        builder.oid().eq(HEX)?;
        assert_eq!(
            builder.build().to_json(),
            json!({ "_id": { "$eq": { "$oid": HEX } } })
        );
        Ok(())
    }

    #[test]
    fn configured_and_explicit_keys() -> Result<()> {
        let config = FilterConfig {
            id_key: "uid".to_string(),
            ..FilterConfig::default()
        };
        let mut builder = FilterBuilder::with_config(config);
        builder.oid().eq(HEX)?.oid_at("owner").eq(HEX)?;
        assert_eq!(
            builder.build().to_json(),
            json!({
                "uid": { "$eq": { "$oid": HEX } },
                "owner": { "$eq": { "$oid": HEX } }
            })
        );
        Ok(())
    }

    #[test]
    fn malformed_id_is_rejected() {
        let mut builder = FilterBuilder::new();
        let err = builder.oid().eq("xyz").unwrap_err();
        assert!(matches!(err, FilterError::InvalidObjectId { .. }));
        assert!(builder.is_empty());
    }
}
