use crate::element::{Block, ComponentKind, Element, ElementId, ElementRef, factory};

const ID_PREFIX: &str = "element_";

/// The live document: top-level elements, the selection and the id counter.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    next_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            next_id: 1,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Reserve an identifier no element of the document uses yet.
    ///
    /// The counter wraps back to 1 once exhausted and skips numbers that
    /// loaded elements already carry.
    pub fn allocate_id(&mut self) -> ElementId {
        while self.number_in_use(self.next_id) {
            self.advance_counter();
        }
        let id = format!("{ID_PREFIX}{}", self.next_id);
        self.advance_counter();
        id
    }

    fn advance_counter(&mut self) {
        self.next_id = self.next_id.checked_add(1).unwrap_or(1);
    }

    fn number_in_use(&self, n: u64) -> bool {
        self.elements
            .iter()
            .flat_map(|e| std::iter::once(e.id()).chain(e.blocks().iter().map(Block::id)))
            .filter_map(generated_number)
            .any(|used| used == n)
    }

    /// Build a default element of `kind` at (`x`, `y`) with a fresh identifier.
    ///
    /// The element is not inserted; see [`Document::push`].
    pub fn create_element(&mut self, kind: ComponentKind, x: f32, y: f32) -> Element {
        let id = self.allocate_id();
        factory::create_element(kind, &id, x, y)
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn set_selected(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    /// Swap in a whole new element list and clear the selection.
    ///
    /// The id counter skips past any generated id already present in
    /// `elements`, so later allocations cannot collide with loaded ones.
    pub fn replace(&mut self, elements: Vec<Element>) {
        let highest = elements
            .iter()
            .flat_map(|e| std::iter::once(e.id()).chain(e.blocks().iter().map(Block::id)))
            .filter_map(generated_number)
            .max();
        if let Some(n) = highest {
            self.next_id = self.next_id.max(n.saturating_add(1));
        }

        self.elements = elements;
        self.selected = None;
    }

    /// Look `id` up among top-level elements and one level into groups.
    pub fn find_element(&self, id: &str) -> Option<ElementRef<'_>> {
        for element in &self.elements {
            match element {
                Element::Block(b) if b.id() == id => return Some(ElementRef::Block(b)),
                Element::Block(_) => {}
                Element::Group(g) if g.id == id => return Some(ElementRef::Group(g)),
                Element::Group(g) => {
                    if let Some(child) = g.elements.iter().find(|b| b.id() == id) {
                        return Some(ElementRef::Block(child));
                    }
                }
            }
        }
        None
    }

    /// Mutable access to the block `id`, for direct field assignment.
    pub fn find_block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.elements
            .iter_mut()
            .flat_map(Element::blocks_mut)
            .find(|b| b.id() == id)
    }

    pub fn selected_block(&self) -> Option<&Block> {
        match self.find_element(self.selected()?)? {
            ElementRef::Block(b) => Some(b),
            ElementRef::Group(_) => None,
        }
    }
}

/// The counter value encoded in a generated id such as `element_12` or `element_12_title`.
fn generated_number(id: &str) -> Option<u64> {
    let rest = id.strip_prefix(ID_PREFIX)?;
    let digits = rest.split('_').next()?;
    digits.parse().ok()
}
