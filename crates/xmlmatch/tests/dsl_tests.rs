mod common;

use xmlmatch::assertions::{assert_has, assert_match, assert_not_has};
use xmlmatch::{element, AttrValue, Comment, Element, ElementBuilder, NodeKind, Pattern, WriteXml};

#[test]
fn test_macro_builds_same_tree_as_append() -> Result<(), Box<dyn std::error::Error>> {
    let note = Comment::new("generated")?;
    let rows = ["a", "b"];
    let table = element!("table", { "border" => 1, "hidden" => false };
        note;
        #["tr"; #["td"; "head"]];
        ..rows.iter().map(|r| element!("tr"; #["td"; *r]))
    );

    let expected = Element::with_attributes(
        "table",
        [("border", AttrValue::from(1)), ("hidden", false.into())],
    );
    expected.append(Comment::new("generated")?);
    for text in ["head", "a", "b"] {
        let tr = Element::new("tr");
        let td = Element::new("td");
        td.append(text);
        tr.append(td);
        expected.append(tr);
    }
    assert_eq!(table, expected);
    assert_eq!(
        table.to_xml(),
        "<table border='1'><!-- generated --><tr><td>head</td></tr>\
         <tr><td>a</td></tr><tr><td>b</td></tr></table>"
    );
    Ok(())
}

#[test]
fn test_builder_matches_callback_construction() {
    let built = ElementBuilder::new("base")
        .attr("attr", "value")
        .child(ElementBuilder::new("sub").child("x"))
        .build();

    let called = Element::build("base", [("attr", "value")], |e| {
        e.append(Element::build("sub", Vec::<(&str, &str)>::new(), |s| {
            s.append("x");
        }));
    });
    assert_eq!(built, called);
}

#[test]
fn test_assertions_on_built_tree() {
    common::init_tracing();

    let doc = element!("html";
        #["body", { "class" => "main" };
            #["p"; "hello"];
        ];
    );
    assert_has("p", &doc);
    assert_has(Pattern::with_attributes("body", [("class", "main")]), &doc);
    assert_match("html", &doc);
    assert_not_has(NodeKind::Comment, &doc);
    xmlmatch::assert_has!(element!("p"; "hello"), doc);
    xmlmatch::assert_match!(element!("html"; #["body"]), doc);
}

#[test]
#[should_panic(expected = "to have p")]
fn test_assert_has_reports_pattern() {
    assert_has("p", &element!("div"));
}
