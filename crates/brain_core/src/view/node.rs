use super::action::Action;

/// Element kinds understood by front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Page,
    Header,
    Nav,
    NavLink,
    Avatar,
    Section,
    Heading,
    List,
    Item,
    Text,
    Button,
    Form,
    Grid,
    Row,
    Cell,
    Bar,
}

impl Tag {
    /// Tags rendered on their parent's line rather than on their own.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            Self::NavLink | Self::Avatar | Self::Text | Self::Button | Self::Cell
        )
    }
}

/// One element of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub tag: Tag,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: Option<String>,
    pub attrs: Vec<(String, String)>,
    /// Click binding; rebuilt with the node on every render.
    pub on_click: Option<Action>,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            text: None,
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(Tag::Text).with_text(value)
    }

    pub fn button(label: impl Into<String>, on_click: Option<Action>) -> Self {
        let mut node = Self::new(Tag::Button).with_text(label);
        node.on_click = on_click;
        node
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Depth-first search by element id.
    pub fn find_by_id(&self, id: &str) -> Option<&ViewNode> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Click binding of the element with `id`, if both exist.
    pub fn action_of(&self, id: &str) -> Option<&Action> {
        self.find_by_id(id).and_then(|node| node.on_click.as_ref())
    }
}
