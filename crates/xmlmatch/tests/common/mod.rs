#![allow(dead_code)]

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
use xmlmatch::{Element, PcString};

/// Route library tracing output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_test_writer()
        .try_init();
}

/// `<e><s1><d>1st</d>2nd</s1><s2>3rd</s2></e>`
pub fn sample() -> Element {
    let e = Element::new("e");
    let s1 = Element::new("s1");
    let d = Element::new("d");
    d.append("1st");
    s1.append(&d).append("2nd");
    let s2 = Element::new("s2");
    s2.append("3rd");
    e.append(&s1).append(&s2);
    e
}

/// `<base><sub><deep>text&amp;&lt;</deep></sub><sub attr='value' /></base>`
pub fn deep() -> Element {
    let base = Element::new("base");
    let sub = Element::new("sub");
    let deep = Element::new("deep");
    deep.append("text")
        .append(PcString::pre_escaped("&amp;"))
        .append("<");
    sub.append(deep);
    base.append(sub);
    base.append(Element::with_attributes("sub", [("attr", "value")]));
    base
}
