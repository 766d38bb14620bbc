use crate::value::DynamicStruct;

slotmap::new_key_type! {
    /// A generational handle to an object in an [`ObjectGraph`].
    ///
    /// Ids of removed objects are never reused for new objects, so a stale id
    /// simply stops resolving.
    pub struct ObjectId;
}

/// Read and write access to a live object graph.
///
/// The graph owns every object. Callers hold [`ObjectId`]s only, and each
/// access borrows the graph for its own duration.
///
/// The trait is object safe.
pub trait ObjectGraph {
    /// Returns the class name of `id`.
    fn class_of(&self, id: ObjectId) -> Option<&str>;

    /// Returns the property storage of `id`.
    fn storage(&self, id: ObjectId) -> Option<&DynamicStruct>;

    /// Returns the mutable property storage of `id`.
    fn storage_mut(&mut self, id: ObjectId) -> Option<&mut DynamicStruct>;

    /// Returns the side object holding `id`'s layout properties, if any.
    fn alternate_root(&self, id: ObjectId) -> Option<ObjectId>;

    /// Returns the parent of `id`.
    fn parent(&self, id: ObjectId) -> Option<ObjectId>;

    /// Returns the ordered children of `id`; empty for unknown ids.
    fn children(&self, id: ObjectId) -> &[ObjectId];

    /// Moves `child` to position `index` among `parent`'s children.
    ///
    /// Returns `false`, leaving the order unchanged, if `child` is not a
    /// child of `parent` or `index` is past the last position.
    fn move_child(&mut self, parent: ObjectId, child: ObjectId, index: usize) -> bool;

    /// Finds an object by its reference path.
    fn find_object(&self, path: &str) -> Option<ObjectId>;

    /// Returns the reference path of `id`.
    fn object_path(&self, id: ObjectId) -> Option<&str>;

    /// Returns `true` if `id` refers to a live object.
    #[inline]
    fn contains(&self, id: ObjectId) -> bool {
        self.storage(id).is_some()
    }

    /// Returns the position of `id` among its parent's children.
    fn sibling_index(&self, id: ObjectId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }
}
