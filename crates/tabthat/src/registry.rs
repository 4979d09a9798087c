//! Owning collection of live tab controllers.

use tabthat_config::{TabOptions, TabsConfig};
use tabthat_dom::{Document, NodeId, Selector};

use crate::controller::TabController;
use crate::error::TabError;
use crate::event::Event;

/// Identifier of a controller inside a [`TabSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(u64);

/// Live tab controllers for one document.
///
/// The set is the single owner of its controllers: it enhances containers,
/// refuses to enhance the same container twice, routes events and tears
/// controllers down.
#[derive(Debug, Default)]
pub struct TabSet {
    config: TabsConfig,
    controllers: Vec<(ControllerId, TabController)>,
    next_id: u64,
}

impl TabSet {
    /// Create an empty set whose controllers start from `config`.
    #[must_use]
    pub fn new(config: TabsConfig) -> Self {
        Self {
            config,
            controllers: Vec::new(),
            next_id: 0,
        }
    }

    /// Base configuration applied to every enhancement.
    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    /// Enhance a single container.
    ///
    /// If a live controller already owns `container`, its id is returned and
    /// nothing is re-initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be linked (see
    /// [`TabController::new`]).
    pub fn enhance(
        &mut self,
        doc: &mut Document,
        container: NodeId,
        options: &TabOptions,
    ) -> Result<ControllerId, TabError> {
        if let Some(id) = self.find_by_container(container) {
            tracing::debug!(?id, "Container already enhanced");
            return Ok(id);
        }

        let config = self.config.with_options(options);
        let controller = TabController::new(doc, container, config)?;

        let id = ControllerId(self.next_id);
        self.next_id += 1;
        self.controllers.push((id, controller));
        Ok(id)
    }

    /// Enhance every element matching the container selector, in document order.
    ///
    /// Stops at the first container that fails to link; containers enhanced
    /// before it stay live.
    ///
    /// # Errors
    ///
    /// Returns an error for an invalid container selector or a container that
    /// cannot be linked.
    pub fn enhance_all(
        &mut self,
        doc: &mut Document,
        options: &TabOptions,
    ) -> Result<Vec<ControllerId>, TabError> {
        let config = self.config.with_options(options);
        let selector = Selector::parse(&config.container_selector)?;
        let containers = doc.query_selector_all(doc.root(), &selector);

        tracing::info!(
            selector = %selector,
            count = containers.len(),
            "Enhancing tab containers"
        );

        containers
            .into_iter()
            .map(|container| self.enhance(doc, container, options))
            .collect()
    }

    /// Destroy one controller and return its container.
    pub fn destroy(&mut self, doc: &mut Document, id: ControllerId) -> Option<NodeId> {
        let pos = self.controllers.iter().position(|(cid, _)| *cid == id)?;
        let (_, controller) = self.controllers.remove(pos);
        Some(controller.destroy(doc))
    }

    /// Destroy every controller, newest first. Returns the containers.
    pub fn destroy_all(&mut self, doc: &mut Document) -> Vec<NodeId> {
        let mut containers = Vec::with_capacity(self.controllers.len());
        while let Some((_, controller)) = self.controllers.pop() {
            containers.push(controller.destroy(doc));
        }
        containers
    }

    /// Deliver an event.
    ///
    /// The event bubbles from its target towards the root; the first element
    /// with a matching binding handles it. Returns whether any binding fired.
    pub fn dispatch(&mut self, doc: &mut Document, event: &Event) -> bool {
        let kind = event.kind();
        let mut current = Some(event.target());

        while let Some(node) = current {
            if let Some((id, controller)) = self
                .controllers
                .iter_mut()
                .find(|(_, controller)| controller.listens(node, kind))
            {
                tracing::debug!(?id, ?kind, "Dispatching tab event");
                return controller.handle(doc, node, event);
            }
            current = doc.parent(node);
        }

        tracing::debug!(?kind, "Event matched no tab binding");
        false
    }

    /// Id of the live controller that owns `container`.
    pub fn find_by_container(&self, container: NodeId) -> Option<ControllerId> {
        self.controllers
            .iter()
            .find(|(_, controller)| controller.container() == container)
            .map(|(id, _)| *id)
    }

    pub fn get(&self, id: ControllerId) -> Option<&TabController> {
        self.controllers
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, controller)| controller)
    }

    pub fn get_mut(&mut self, id: ControllerId) -> Option<&mut TabController> {
        self.controllers
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, controller)| controller)
    }

    /// Ids in enhancement order.
    pub fn ids(&self) -> Vec<ControllerId> {
        self.controllers.iter().map(|(id, _)| *id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ControllerId, &TabController)> {
        self.controllers.iter().map(|(id, controller)| (*id, controller))
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
