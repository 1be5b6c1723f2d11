use crate::node::{ConfigNode, PreOrder, walk};
use crate::resolution::ResolutionConfig;
use fxhash::FxHashMap;

/// Route from the category roots to a node: one child index per level.
type Route = Box<[usize]>;

/// One fully built grievance configuration: category tree, flag list, resolution defaults and
/// the name indexes used by lookups.
///
/// Snapshots are immutable. The registry publishes them behind an `Arc` and replaces them as a
/// whole on reload.
#[derive(Debug, Clone, Default)]
pub struct GrievanceConfig {
    categories: Vec<ConfigNode>,
    flags: Vec<ConfigNode>,
    resolution: ResolutionConfig,
    /// Bare name → first pre-order match.
    category_names: FxHashMap<String, Route>,
    /// Full `a|b` path → node.
    category_paths: FxHashMap<String, Route>,
    flag_names: FxHashMap<String, usize>,
    pub(crate) generation: u64,
}

impl GrievanceConfig {
    pub(crate) fn new(
        categories: Vec<ConfigNode>,
        flags: Vec<ConfigNode>,
        resolution: ResolutionConfig,
    ) -> Self {
        let mut category_names = FxHashMap::default();
        let mut category_paths = FxHashMap::default();
        let mut route = Vec::new();
        index_categories(&categories, &mut route, &mut category_names, &mut category_paths);

        let mut flag_names = FxHashMap::default();
        for (i, flag) in flags.iter().enumerate() {
            flag_names.entry(flag.name().to_owned()).or_insert(i);
        }

        Self {
            categories,
            flags,
            resolution,
            category_names,
            category_paths,
            flag_names,
            generation: 0,
        }
    }

    #[must_use]
    pub fn categories(&self) -> &[ConfigNode] {
        &self.categories
    }

    #[must_use]
    pub fn flags(&self) -> &[ConfigNode] {
        &self.flags
    }

    #[must_use]
    pub const fn resolution(&self) -> &ResolutionConfig {
        &self.resolution
    }

    /// Reload counter stamped by the registry; `0` for snapshots never installed.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Every category in pre-order.
    pub fn walk_categories(&self) -> PreOrder<'_> {
        walk(&self.categories)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.walk_categories().count()
    }

    /// Finds a category by bare name (first pre-order match) or by full `a|b` path.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&ConfigNode> {
        self.category_names
            .get(name)
            .or_else(|| self.category_paths.get(name))
            .and_then(|route| self.node_at(route))
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> Option<&ConfigNode> {
        self.flag_names.get(name).and_then(|i| self.flags.get(*i))
    }

    fn node_at(&self, route: &[usize]) -> Option<&ConfigNode> {
        let (first, rest) = route.split_first()?;
        rest.iter().try_fold(self.categories.get(*first)?, |node, i| node.children().get(*i))
    }
}

fn index_categories(
    nodes: &[ConfigNode],
    route: &mut Vec<usize>,
    names: &mut FxHashMap<String, Route>,
    paths: &mut FxHashMap<String, Route>,
) {
    for (i, node) in nodes.iter().enumerate() {
        route.push(i);
        names.entry(node.name().to_owned()).or_insert_with(|| route.clone().into());
        paths.entry(node.path().to_owned()).or_insert_with(|| route.clone().into());
        index_categories(node.children(), route, names, paths);
        route.pop();
    }
}

/// Structural equality: generation and indexes are derived data and do not take part.
impl PartialEq for GrievanceConfig {
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
            && self.flags == other.flags
            && self.resolution == other.resolution
    }
}

impl Eq for GrievanceConfig {}
