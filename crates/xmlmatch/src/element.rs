//! Element nodes
//!
//! An [`Element`] is a cheap handle: cloning it yields a second handle onto
//! the *same* attribute map and content list, so mutations through either
//! handle are visible through both. Use [`Element::deep_clone`] for an
//! independent copy.

use indexmap::IndexMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::node::{AttrValue, IntoContent, Node};
use crate::symbol::Symbol;
use crate::writer::WriteXml;

/// Attribute map, in insertion order
pub type Attributes = IndexMap<Symbol, AttrValue>;

/// A named XML element with attributes and ordered content
#[derive(Clone, Debug)]
pub struct Element {
    name: Symbol,
    attributes: Rc<RefCell<Attributes>>,
    contents: Rc<RefCell<Vec<Node>>>,
}

impl Element {
    /// Create an empty element
    pub fn new(name: impl Into<Symbol>) -> Self {
        Self {
            name: name.into(),
            attributes: Rc::new(RefCell::new(Attributes::new())),
            contents: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Create an element with initial attributes
    pub fn with_attributes<K, V>(
        name: impl Into<Symbol>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<Symbol>,
        V: Into<AttrValue>,
    {
        let element = Self::new(name);
        element.attributes.borrow_mut().extend(
            attributes
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        element
    }

    /// Create an element and hand it to `populate` before returning it
    pub fn build<K, V>(
        name: impl Into<Symbol>,
        attributes: impl IntoIterator<Item = (K, V)>,
        populate: impl FnOnce(&Self),
    ) -> Self
    where
        K: Into<Symbol>,
        V: Into<AttrValue>,
    {
        let element = Self::with_attributes(name, attributes);
        populate(&element);
        element
    }

    pub fn name(&self) -> &Symbol {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: impl Into<Symbol>) {
        self.name = name.into();
    }

    pub fn attributes(&self) -> Ref<'_, Attributes> {
        self.attributes.borrow()
    }

    pub fn attributes_mut(&self) -> RefMut<'_, Attributes> {
        self.attributes.borrow_mut()
    }

    pub fn contents(&self) -> Ref<'_, Vec<Node>> {
        self.contents.borrow()
    }

    pub fn contents_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.contents.borrow_mut()
    }

    /// Look up an attribute (by key) or a child (by position)
    pub fn get<I: ElementIndex>(&self, index: I) -> Option<I::Output> {
        index.lookup(self)
    }

    pub fn attribute(&self, key: &str) -> Option<AttrValue> {
        self.attributes.borrow().get(key).cloned()
    }

    pub fn child(&self, index: usize) -> Option<Node> {
        self.contents.borrow().get(index).cloned()
    }

    pub fn add_attribute(&self, key: impl Into<Symbol>, value: impl Into<AttrValue>) -> &Self {
        self.attributes
            .borrow_mut()
            .insert(key.into(), value.into());
        self
    }

    /// Remove an attribute, keeping the order of the remaining ones
    pub fn remove_attribute(&self, key: &str) -> Option<AttrValue> {
        self.attributes.borrow_mut().shift_remove(key)
    }

    /// Append exactly one child
    pub fn append(&self, child: impl Into<Node>) -> &Self {
        let child = child.into();
        self.contents.borrow_mut().push(child);
        self
    }

    /// Append content: `None` is ignored and sequences are flattened one level
    pub fn add(&self, content: impl IntoContent) -> &Self {
        let mut nodes = Vec::new();
        content.push_into(&mut nodes);
        self.contents.borrow_mut().extend(nodes);
        self
    }

    pub fn len(&self) -> usize {
        self.contents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.borrow().is_empty()
    }

    /// True if both handles share attribute and content storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.attributes, &other.attributes) && Rc::ptr_eq(&self.contents, &other.contents)
    }

    /// Copy the whole subtree into fresh storage
    pub fn deep_clone(&self) -> Self {
        let contents = self
            .contents
            .borrow()
            .iter()
            .map(|child| match child {
                Node::Element(e) => Node::Element(e.deep_clone()),
                other => other.clone(),
            })
            .collect();

        Self {
            name: self.name.clone(),
            attributes: Rc::new(RefCell::new(self.attributes.borrow().clone())),
            contents: Rc::new(RefCell::new(contents)),
        }
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && *self.attributes.borrow() == *other.attributes.borrow()
            && *self.contents.borrow() == *other.contents.borrow()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_xml())
    }
}

/// Key type accepted by [`Element::get`]
pub trait ElementIndex {
    type Output;

    fn lookup(self, element: &Element) -> Option<Self::Output>;
}

impl ElementIndex for usize {
    type Output = Node;

    fn lookup(self, element: &Element) -> Option<Node> {
        element.child(self)
    }
}

/// Negative positions count back from the last child
impl ElementIndex for i32 {
    type Output = Node;

    fn lookup(self, element: &Element) -> Option<Node> {
        let len = element.len();
        let index = if self < 0 {
            len.checked_sub(usize::try_from(self.unsigned_abs()).ok()?)?
        } else {
            usize::try_from(self).ok()?
        };
        element.child(index)
    }
}

impl ElementIndex for &str {
    type Output = AttrValue;

    fn lookup(self, element: &Element) -> Option<AttrValue> {
        element.attribute(self)
    }
}

impl ElementIndex for &Symbol {
    type Output = AttrValue;

    fn lookup(self, element: &Element) -> Option<AttrValue> {
        element.attribute(self.as_str())
    }
}

impl ElementIndex for Symbol {
    type Output = AttrValue;

    fn lookup(self, element: &Element) -> Option<AttrValue> {
        (&self).lookup(element)
    }
}

/// An element whose name may be changed after construction
///
/// Plain [`Element`]s expose no way to rename themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct RenamableElement(Element);

impl RenamableElement {
    pub fn new(name: impl Into<Symbol>) -> Self {
        Self(Element::new(name))
    }

    pub fn with_attributes<K, V>(
        name: impl Into<Symbol>,
        attributes: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<Symbol>,
        V: Into<AttrValue>,
    {
        Self(Element::with_attributes(name, attributes))
    }

    pub fn rename(&mut self, name: impl Into<Symbol>) -> &mut Self {
        self.0.set_name(name);
        self
    }

    pub fn into_element(self) -> Element {
        self.0
    }
}

impl Deref for RenamableElement {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.0
    }
}

impl From<RenamableElement> for Node {
    fn from(e: RenamableElement) -> Self {
        Self::Element(e.0)
    }
}
