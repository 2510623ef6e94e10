// Store Key Composition
//
// Every store key is derived deterministically and injectively from
// (purpose tag, namespace, identifier). Namespace isolation is structural:
// the kind is folded into the key, so a wrong-kind lookup is
// indistinguishable from a missing key.

/// Fixed prefix scoping all keys owned by this service
const KEY_PREFIX: &str = "uuidmap";

/// Purpose tag for forward mappings: (kind, token) -> job_id
const PURPOSE_FORWARD: &str = "fwd";

/// Purpose tag for reverse mappings: (kind, job_id) -> token
const PURPOSE_REVERSE: &str = "rev";

/// Purpose tag for notification flags: job_id -> bool
const PURPOSE_NOTIFIED: &str = "notified";

/// Store key constructors.
///
/// Components are escaped so that a separator occurring inside a kind,
/// token, or job identifier can never make two distinct inputs collide.
pub struct StoreKey;

impl StoreKey {
    /// Key for the forward entry (kind, token) -> job_id
    pub fn forward(kind: &str, token: &str) -> String {
        compose(PURPOSE_FORWARD, &[kind, token])
    }

    /// Key for the reverse entry (kind, job_id) -> token
    pub fn reverse(kind: &str, job_id: &str) -> String {
        compose(PURPOSE_REVERSE, &[kind, job_id])
    }

    /// Key for the notification flag of job_id (not namespaced)
    pub fn notified(job_id: &str) -> String {
        compose(PURPOSE_NOTIFIED, &[job_id])
    }
}

fn compose(purpose: &str, components: &[&str]) -> String {
    let mut key = format!("{}:{}", KEY_PREFIX, purpose);
    for component in components {
        key.push(':');
        key.push_str(&escape(component));
    }
    key
}

/// Percent-escape the separator (and the escape character itself) so that
/// escaped components never contain ':'. Injective by construction.
fn escape(component: &str) -> String {
    component.replace('%', "%25").replace(':', "%3a")
}
