//! Integration smoke tests for `addi_mermaid`

use addi_mermaid::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
