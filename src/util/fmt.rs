use std::fmt::{self, Debug, Formatter};

/// Writes the contained text as-is under [`Debug`], for fields that have no useful debug output of
/// their own (closures, for example).
pub struct DebugRaw<'a>(pub &'a str);

impl Debug for DebugRaw<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
