use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::graph::{ObjectGraph, ObjectId};
use vc_reflect::registry::TypeDirectory;

use crate::constraints::extract_constraints_with;
use crate::mutate::mutate;
use crate::protocol::{
    BatchItem, BatchResponse, GetRequest, GetResponse, ListPropertiesRequest, PropertySummary,
    SetRequest, SetResponse,
};
use crate::resolve::{Descriptor, ResolvedTarget};
use crate::{Codec, Error, InspectConfig, PropertyPath, Resolver, Result};

// -----------------------------------------------------------------------------
// Inspector

/// Serves property requests against an [`ObjectGraph`].
///
/// Reads take the graph by shared reference and writes by exclusive
/// reference. Each request resolves its path anew, so handles never
/// outlive a request.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use vc_propath::Inspector;
/// use vc_propath::protocol::{GetRequest, SetRequest};
/// use vc_reflect::graph::ObjectArena;
/// use vc_reflect::info::{PropertyInfo, StructInfo};
/// use vc_reflect::registry::TypeTable;
///
/// let mut types = TypeTable::new();
/// types.register(StructInfo::new("Widget", [
///     PropertyInfo::bool("bIsEnabled"),
/// ]).with_super("Object"));
///
/// let mut graph = ObjectArena::new();
/// graph.spawn(&types, "Widget", "/Game/Menu.Title");
///
/// let inspector = Inspector::new(&types);
/// // `IsEnabled` is an alias of `bIsEnabled`.
/// let request = SetRequest::new("/Game/Menu.Title", "IsEnabled", json!(true));
/// assert_eq!(inspector.set(&mut graph, &request).unwrap().applied_value, json!(true));
///
/// let request = GetRequest::new("/Game/Menu.Title", "bIsEnabled");
/// assert_eq!(inspector.get(&graph, &request).unwrap().native_type_name, "Bool");
/// ```
pub struct Inspector<'a> {
    directory: &'a dyn TypeDirectory,
    config: InspectConfig,
}

impl<'a> Inspector<'a> {
    /// Creates an inspector with the default configuration.
    pub fn new(directory: &'a dyn TypeDirectory) -> Self {
        Self {
            directory,
            config: InspectConfig::default(),
        }
    }

    #[inline]
    pub fn with_config(self, config: InspectConfig) -> Self {
        Self { config, ..self }
    }

    #[inline]
    pub fn config(&self) -> &InspectConfig {
        &self.config
    }

    #[inline]
    pub fn directory(&self) -> &'a dyn TypeDirectory {
        self.directory
    }

    #[inline]
    pub fn codec(&self) -> Codec<'a> {
        Codec::new(self.directory)
    }

    #[inline]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self.directory, &self.config)
    }

    /// Parses `path` with the configured alternate root token.
    pub fn parse(&self, path: &str) -> Result<PropertyPath> {
        PropertyPath::parse_with(path, self.config.alternate_root())
    }

    /// Looks the object at `path` up in `graph`.
    pub fn find_root(&self, graph: &dyn ObjectGraph, path: &str) -> Result<ObjectId> {
        graph
            .find_object(path)
            .ok_or_else(|| Error::ObjectNotFound(String::from(path)))
    }

    fn resolve(
        &self,
        graph: &dyn ObjectGraph,
        root: ObjectId,
        path: &str,
    ) -> Result<ResolvedTarget<'_>> {
        let path = self.parse(path)?;
        self.resolver().resolve(graph, root, &path)
    }

    // -------------------------------------------------------------------------
    // Reads

    /// Reads the property of a [`GetRequest`].
    ///
    /// Constraints are reported only when the property declares any.
    pub fn get(&self, graph: &dyn ObjectGraph, request: &GetRequest) -> Result<GetResponse> {
        let root = self.find_root(graph, &request.root)?;
        self.read(graph, root, &request.path)
    }

    fn read(&self, graph: &dyn ObjectGraph, root: ObjectId, path: &str) -> Result<GetResponse> {
        let target = self.resolve(graph, root, path)?;
        let info = target.info();
        let value = target.read(graph)?;

        let suffix = self.config.sentinel_suffix();
        let constraints = extract_constraints_with(self.directory, info, suffix);
        log::debug!("get `{path}` on {root:?}");
        Ok(GetResponse {
            value: self.codec().encode(graph, &value, info),
            native_type_name: info.type_name(),
            constraints: (!constraints.is_empty()).then_some(constraints),
        })
    }

    /// Reads several paths from one root.
    ///
    /// A failing path is reported in its entry and does not stop the others.
    pub fn get_many<S: AsRef<str>>(
        &self,
        graph: &dyn ObjectGraph,
        root: &str,
        paths: &[S],
    ) -> BatchResponse {
        let root = self.find_root(graph, root);
        paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let result = match &root {
                    Ok(root) => self.read(graph, *root, path),
                    Err(err) => Err(err.clone()),
                };
                match result {
                    Ok(response) => BatchItem::success(path, response.value),
                    Err(err) => BatchItem::failure(path, &err),
                }
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Writes

    /// Applies a [`SetRequest`] and reads the property back.
    ///
    /// With a collection operation, the request value is the operand of the
    /// operation. Otherwise it replaces the property value. Writes to a
    /// struct given as an object are applied field by field and are not
    /// rolled back when a later field fails.
    pub fn set(&self, graph: &mut dyn ObjectGraph, request: &SetRequest) -> Result<SetResponse> {
        let root = self.find_root(&*graph, &request.root)?;
        let target = self.resolve(&*graph, root, &request.path)?;
        let codec = self.codec();

        let mut response = SetResponse {
            applied_value: serde_json::Value::Null,
            collection_op: None,
            size: None,
        };

        if let Some(op) = &request.collection_op {
            let outcome = mutate(&codec, graph, &target, op, Some(&request.value))?;
            response.collection_op = Some(outcome.op);
            response.size = Some(outcome.size);
        } else {
            match target.descriptor() {
                Descriptor::Synthetic(rule) => {
                    let value = codec.decode(&*graph, &request.value, rule.info())?;
                    rule.set(graph, target.root(), &value)?;
                }
                Descriptor::Property(info) => {
                    codec.apply(graph, target.handle(), &request.value, info)?;
                }
            }
        }

        let applied = target.read(&*graph)?;
        response.applied_value = codec.encode(&*graph, &applied, target.info());
        log::debug!("set `{}` on `{}`", request.path, request.root);
        Ok(response)
    }

    /// Applies every request in order.
    ///
    /// Each request succeeds or fails on its own. Earlier writes are kept
    /// when a later request fails.
    pub fn set_batch(&self, graph: &mut dyn ObjectGraph, requests: &[SetRequest]) -> BatchResponse {
        let response: BatchResponse = requests
            .iter()
            .map(|request| match self.set(graph, request) {
                Ok(applied) => BatchItem::success(request.path.as_str(), applied.applied_value),
                Err(err) => {
                    log::debug!("batch entry `{}` failed: {err}", request.path);
                    BatchItem::failure(request.path.as_str(), &err)
                }
            })
            .collect();
        if response.failed > 0 {
            log::warn!(
                "batch set finished with {} of {} entries failed",
                response.failed,
                requests.len()
            );
        }
        response
    }

    // -------------------------------------------------------------------------
    // Types

    /// Lists the properties of a struct or class, super types first.
    ///
    /// Non-editable properties are skipped unless requested.
    pub fn list_properties(&self, request: &ListPropertiesRequest) -> Result<Vec<PropertySummary>> {
        if self.directory.struct_info(&request.type_name).is_none() {
            return Err(Error::unsupported_type(
                request.type_name.as_str(),
                "not a registered struct or class",
            ));
        }
        Ok(self
            .directory
            .properties(&request.type_name)
            .into_iter()
            .filter(|info| request.include_non_editable || info.is_editable())
            .map(PropertySummary::from)
            .collect())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use serde_json::json;
    use vc_reflect::graph::ObjectGraph;

    use super::Inspector;
    use crate::fixtures::{BUTTON, LABEL, PANEL, fixture};
    use crate::mutate::{CollectionOp, CollectionOpKind};
    use crate::protocol::{GetRequest, ListPropertiesRequest, SetRequest};
    use crate::{ErrorKind, InspectConfig};

    #[test]
    fn set_then_get() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let applied = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "RenderOpacity", json!(0.25)))
            .unwrap();
        assert_eq!(applied.applied_value, json!(0.25));
        assert_eq!(applied.size, None);

        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "RenderOpacity")).unwrap();
        assert_eq!(response.value, json!(0.25));
        assert_eq!(response.native_type_name, "Float");
        let constraints = response.constraints.unwrap();
        assert_eq!((constraints.min, constraints.max), (Some(0.0), Some(1.0)));

        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Items[1].Name")).unwrap();
        assert_eq!(response.value, json!("Shield"));
        assert_eq!(response.constraints, None);
    }

    #[test]
    fn native_type_names() {
        let fx = fixture();
        let inspector = Inspector::new(&fx.types);
        let name_of = |path: &str| {
            let request = GetRequest::new(BUTTON, path);
            inspector.get(&fx.arena, &request).unwrap().native_type_name
        };

        assert_eq!(name_of("bIsEnabled"), "Bool");
        assert_eq!(name_of("Level"), "Byte");
        assert_eq!(name_of("Scores"), "Map<Int, Float>");
        assert_eq!(name_of("Items"), "List<ItemEntry>");
        assert_eq!(name_of("Tint"), "LinearColor");
    }

    #[test]
    fn composite_values() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let applied = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Tint", json!([0.5, 0.25, 0])))
            .unwrap();
        assert_eq!(applied.applied_value, json!({ "R": 0.5, "G": 0.25, "B": 0.0, "A": 1.0 }));

        let applied = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Slot.Padding", json!(4)))
            .unwrap();
        assert_eq!(
            applied.applied_value,
            json!({ "Left": 4.0, "Top": 4.0, "Right": 4.0, "Bottom": 4.0 })
        );

        let applied = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Scores[42]", json!("3.5")))
            .unwrap();
        assert_eq!(applied.applied_value, json!(3.5));

        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Counts[Rare]")).unwrap();
        assert_eq!(response.value, json!(3));
    }

    #[test]
    fn out_of_bounds_index() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let err = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Items[5]", json!({ "Name": "Bow" })))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
        assert!(err.to_string().contains("index 5 (len=3)"), "{err}");
    }

    #[test]
    fn set_elements_are_not_traversable() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);
        let before = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Tags")).unwrap();

        let err = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Tags[0].Name", json!("root")))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedTraversal);

        let after = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Tags")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn child_order() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let request = GetRequest::new(BUTTON, "Slot.ChildOrder");
        let response = inspector.get(&fx.arena, &request).unwrap();
        assert_eq!(response.value, json!(1));
        assert_eq!(response.native_type_name, "Int");

        let applied = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Slot.ChildOrder", json!(0)))
            .unwrap();
        assert_eq!(applied.applied_value, json!(0));
        assert_eq!(fx.arena.children(fx.panel), &[fx.button, fx.label]);

        let request = GetRequest::new(LABEL, "Slot.ChildOrder");
        let response = inspector.get(&fx.arena, &request).unwrap();
        assert_eq!(response.value, json!(1));

        let err = inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "Slot.ChildOrder", json!(2)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);

        let err = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "ChildOrder")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PropertyNotFound);
        let err = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Slot")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ParseError);
        let err = inspector.get(&fx.arena, &GetRequest::new(PANEL, "Slot.ChildOrder")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullReference);
    }

    #[test]
    fn aliases() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        inspector
            .set(&mut fx.arena, &SetRequest::new(BUTTON, "IsEnabled", json!(true)))
            .unwrap();
        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "bIsEnabled")).unwrap();
        assert_eq!(response.value, json!(true));

        let inspector = Inspector::new(&fx.types)
            .with_config(InspectConfig::default().with_alias("Opacity", "RenderOpacity"));
        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Opacity")).unwrap();
        assert_eq!(response.native_type_name, "Float");
    }

    #[test]
    fn collection_requests() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let request = SetRequest::new(BUTTON, "Offsets", json!(40))
            .with_op(CollectionOp::new(CollectionOpKind::Append));
        let applied = inspector.set(&mut fx.arena, &request).unwrap();
        assert_eq!(applied.collection_op, Some(CollectionOpKind::Append));
        assert_eq!(applied.size, Some(4));
        assert_eq!(applied.applied_value, json!([10, 20, 30, 40]));

        let request = SetRequest::new(BUTTON, "Labels", json!(null))
            .with_op(CollectionOp::new(CollectionOpKind::Remove).with_key("title"));
        let applied = inspector.set(&mut fx.arena, &request).unwrap();
        assert_eq!(applied.size, Some(0));

        let request = SetRequest::new(BUTTON, "RenderOpacity", json!(1))
            .with_op(CollectionOp::new(CollectionOpKind::Append));
        let err = inspector.set(&mut fx.arena, &request).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }

    #[test]
    fn batch_keeps_going() {
        let mut fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let batch = inspector.set_batch(&mut fx.arena, &[
            SetRequest::new(BUTTON, "ZOrder", json!(3)),
            SetRequest::new(BUTTON, "Slot.ZOrder", json!(3)),
            SetRequest::new("/Game/Missing", "RenderOpacity", json!(0.5)),
            SetRequest::new(BUTTON, "Level", json!(7)),
        ]);

        assert_eq!((batch.succeeded, batch.failed), (2, 2));
        let kinds: Vec<_> = batch
            .results
            .iter()
            .map(|item| item.error.as_ref().map(|e| e.kind))
            .collect();
        assert_eq!(kinds, [
            Some(ErrorKind::PropertyNotFound),
            None,
            Some(ErrorKind::ObjectNotFound),
            None,
        ]);
        assert_eq!(batch.results[3].value, Some(json!(7)));

        let response = inspector.get(&fx.arena, &GetRequest::new(BUTTON, "Slot.ZOrder")).unwrap();
        assert_eq!(response.value, json!(3));
    }

    #[test]
    fn get_many_reports_each_path() {
        let fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let batch = inspector.get_many(&fx.arena, BUTTON, &["Offsets[2]", "Offsets[3]", "Owner"]);
        assert_eq!((batch.succeeded, batch.failed), (2, 1));
        assert_eq!(batch.results[0].value, Some(json!(30)));
        assert_eq!(batch.results[2].value, Some(json!(PANEL)));

        let batch = inspector.get_many(&fx.arena, "/Game/Missing", &["Offsets"]);
        assert_eq!(batch.failed, 1);
    }

    #[test]
    fn list_properties() {
        let fx = fixture();
        let inspector = Inspector::new(&fx.types);

        let summaries = inspector.list_properties(&ListPropertiesRequest::new("Button")).unwrap();
        assert!(summaries.iter().all(|s| s.name != "DesignerNotes"));
        assert_eq!(summaries[0].name, "Name");
        assert_eq!(summaries[0].declared_on.as_deref(), Some("Object"));
        assert!(summaries[0].is_read_only);

        let tags = summaries.iter().find(|s| s.name == "Tags").unwrap();
        assert_eq!(tags.kind, "Set");
        assert!(tags.is_collection);
        assert_eq!(tags.declared_on.as_deref(), Some("Button"));

        let opacity = summaries.iter().find(|s| s.name == "RenderOpacity").unwrap();
        assert_eq!(opacity.category.as_deref(), Some("Rendering"));
        assert_eq!(opacity.declared_on.as_deref(), Some("Widget"));

        let all = inspector
            .list_properties(&ListPropertiesRequest::new("Button").include_non_editable())
            .unwrap();
        assert_eq!(all.len(), summaries.len() + 1);

        let err = inspector
            .list_properties(&ListPropertiesRequest::new("WidgetVisibility"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedType);
    }
}
