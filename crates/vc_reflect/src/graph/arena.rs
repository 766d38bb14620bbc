use alloc::string::String;
use alloc::vec::Vec;

use slotmap::SlotMap;

use crate::graph::{ObjectGraph, ObjectId};
use crate::hash::HashMap;
use crate::registry::TypeDirectory;
use crate::value::DynamicStruct;

// -----------------------------------------------------------------------------
// Object

/// An object stored in an [`ObjectArena`].
#[derive(Debug, Clone)]
pub struct Object {
    class: String,
    path: String,
    storage: DynamicStruct,
    slot: Option<ObjectId>,
    parent: Option<ObjectId>,
    children: Vec<ObjectId>,
}

impl Object {
    #[inline]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn storage(&self) -> &DynamicStruct {
        &self.storage
    }

    #[inline]
    pub fn storage_mut(&mut self) -> &mut DynamicStruct {
        &mut self.storage
    }

    #[inline]
    pub fn slot(&self) -> Option<ObjectId> {
        self.slot
    }

    #[inline]
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    #[inline]
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }
}

// -----------------------------------------------------------------------------
// ObjectArena

/// A slotmap-backed [`ObjectGraph`].
///
/// # Examples
///
/// ```
/// use vc_reflect::graph::{ObjectArena, ObjectGraph};
/// use vc_reflect::registry::TypeTable;
///
/// let types = TypeTable::new();
/// let mut arena = ObjectArena::new();
///
/// let panel = arena.spawn(&types, "Object", "/Game/Menu.Panel");
/// let button = arena.spawn(&types, "Object", "/Game/Menu.Button");
/// arena.attach_child(panel, button);
///
/// assert_eq!(arena.find_object("/Game/Menu.Button"), Some(button));
/// assert_eq!(arena.sibling_index(button), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct ObjectArena {
    objects: SlotMap<ObjectId, Object>,
    paths: HashMap<String, ObjectId>,
}

impl ObjectArena {
    /// Creates an empty arena.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object of `class` with default-initialized storage.
    ///
    /// A path already in use is rebound to the new object.
    pub fn spawn(&mut self, directory: &dyn TypeDirectory, class: &str, path: &str) -> ObjectId {
        let storage = directory.instantiate(class);
        self.spawn_with(class, path, storage)
    }

    /// Creates an object with the given storage.
    pub fn spawn_with(&mut self, class: &str, path: &str, storage: DynamicStruct) -> ObjectId {
        let id = self.objects.insert(Object {
            class: String::from(class),
            path: String::from(path),
            storage,
            slot: None,
            parent: None,
            children: Vec::new(),
        });
        if let Some(previous) = self.paths.insert(String::from(path), id) {
            log::warn!("object path `{path}` rebound from {previous:?} to {id:?}");
        }
        id
    }

    /// Removes an object, detaching it from its parent.
    ///
    /// Children are orphaned, not removed. References held by other objects
    /// are left dangling and resolve as missing objects.
    pub fn despawn(&mut self, id: ObjectId) -> Option<Object> {
        let object = self.objects.remove(id)?;
        if self.paths.get(object.path.as_str()) == Some(&id) {
            self.paths.remove(object.path.as_str());
        }
        if let Some(parent) = object.parent.and_then(|p| self.objects.get_mut(p)) {
            parent.children.retain(|&child| child != id);
        }
        for &child in &object.children {
            if let Some(child) = self.objects.get_mut(child) {
                child.parent = None;
            }
        }
        Some(object)
    }

    /// Appends `child` to `parent`'s children, detaching it from any previous parent.
    ///
    /// Returns `false` if either object is missing or they are the same object.
    pub fn attach_child(&mut self, parent: ObjectId, child: ObjectId) -> bool {
        if parent == child || !self.objects.contains_key(parent) {
            return false;
        }
        let Some(previous) = self.objects.get_mut(child).map(|c| c.parent.replace(parent)) else {
            return false;
        };
        if let Some(previous) = previous.and_then(|p| self.objects.get_mut(p)) {
            previous.children.retain(|&c| c != child);
        }
        if let Some(parent) = self.objects.get_mut(parent) {
            parent.children.push(child);
        }
        true
    }

    /// Sets (or clears) the layout slot object of `id`.
    pub fn set_slot(&mut self, id: ObjectId, slot: Option<ObjectId>) -> bool {
        match self.objects.get_mut(id) {
            Some(object) => {
                object.slot = slot;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectGraph for ObjectArena {
    #[inline]
    fn class_of(&self, id: ObjectId) -> Option<&str> {
        self.objects.get(id).map(Object::class)
    }

    #[inline]
    fn storage(&self, id: ObjectId) -> Option<&DynamicStruct> {
        self.objects.get(id).map(Object::storage)
    }

    #[inline]
    fn storage_mut(&mut self, id: ObjectId) -> Option<&mut DynamicStruct> {
        self.objects.get_mut(id).map(Object::storage_mut)
    }

    #[inline]
    fn alternate_root(&self, id: ObjectId) -> Option<ObjectId> {
        self.objects.get(id)?.slot
    }

    #[inline]
    fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.objects.get(id)?.parent
    }

    #[inline]
    fn children(&self, id: ObjectId) -> &[ObjectId] {
        match self.objects.get(id) {
            Some(object) => &object.children,
            None => &[],
        }
    }

    fn move_child(&mut self, parent: ObjectId, child: ObjectId, index: usize) -> bool {
        let Some(object) = self.objects.get_mut(parent) else {
            return false;
        };
        let Some(current) = object.children.iter().position(|&c| c == child) else {
            return false;
        };
        if index >= object.children.len() {
            return false;
        }
        let moved = object.children.remove(current);
        object.children.insert(index, moved);
        true
    }

    #[inline]
    fn find_object(&self, path: &str) -> Option<ObjectId> {
        self.paths.get(path).copied()
    }

    #[inline]
    fn object_path(&self, id: ObjectId) -> Option<&str> {
        self.objects.get(id).map(Object::path)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ObjectArena;
    use crate::graph::ObjectGraph;
    use crate::registry::TypeTable;

    #[test]
    fn attach_and_reorder() {
        let types = TypeTable::new();
        let mut arena = ObjectArena::new();
        let panel = arena.spawn(&types, "Object", "/Panel");
        let a = arena.spawn(&types, "Object", "/A");
        let b = arena.spawn(&types, "Object", "/B");
        let c = arena.spawn(&types, "Object", "/C");
        for child in [a, b, c] {
            assert!(arena.attach_child(panel, child));
        }

        assert_eq!(arena.children(panel), [a, b, c]);
        assert!(arena.move_child(panel, c, 0));
        assert_eq!(arena.children(panel), [c, a, b]);
        assert_eq!(arena.sibling_index(b), Some(2));

        assert!(!arena.move_child(panel, a, 3));
        assert!(!arena.move_child(a, b, 0));
        assert!(!arena.attach_child(panel, panel));
    }

    #[test]
    fn reattach_moves_between_parents() {
        let types = TypeTable::new();
        let mut arena = ObjectArena::new();
        let left = arena.spawn(&types, "Object", "/Left");
        let right = arena.spawn(&types, "Object", "/Right");
        let item = arena.spawn(&types, "Object", "/Item");

        arena.attach_child(left, item);
        arena.attach_child(right, item);

        assert!(arena.children(left).is_empty());
        assert_eq!(arena.children(right), [item]);
        assert_eq!(arena.parent(item), Some(right));
    }

    #[test]
    fn despawn_detaches() {
        let types = TypeTable::new();
        let mut arena = ObjectArena::new();
        let panel = arena.spawn(&types, "Object", "/Panel");
        let item = arena.spawn(&types, "Object", "/Item");
        arena.attach_child(panel, item);

        assert!(arena.despawn(item).is_some());
        assert!(arena.children(panel).is_empty());
        assert_eq!(arena.find_object("/Item"), None);
        assert!(!arena.contains(item));
        assert!(arena.despawn(item).is_none());
    }

    #[test]
    fn storage_is_instantiated() {
        let types = TypeTable::new();
        let mut arena = ObjectArena::new();
        let id = arena.spawn(&types, "Object", "/Thing");
        assert_eq!(arena.class_of(id), Some("Object"));
        assert!(arena.storage(id).unwrap().get("Name").is_some());
        assert_eq!(arena.object_path(id), Some("/Thing"));
    }
}
