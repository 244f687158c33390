//! Change notifier: per-store re-index dispatch on catalog saves.

use anyhow::Context;

use recsync_catalog::{Store, StoreRegistry};
use recsync_core::{EntryId, StoreId};
use recsync_events::{EntrySaved, StoreScope};
use recsync_export::ProductExporter;

use crate::client::{ExportClient, ReindexRequest};
use crate::connection::ConnectionRegistry;

/// Why a store was skipped without dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No connection configured for the store.
    NoConnection,
    /// A connection exists but is not in the connected state.
    NotConnected,
}

/// Outcome of processing one affected store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    Dispatched { store: StoreId },
    Skipped { store: StoreId, reason: SkipReason },
    Failed { store: StoreId, error: String },
}

/// Aggregated per-store outcomes of one save notification.
///
/// The notifier never fails its caller; this summary is the full account of
/// what happened, store by store, in store-resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifySummary {
    pub outcomes: Vec<StoreOutcome>,
}

impl NotifySummary {
    pub fn dispatched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StoreOutcome::Dispatched { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &StoreOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, StoreOutcome::Failed { .. }))
    }
}

/// Reacts to catalog-entry-saved events by re-syncing the normalized
/// product record to every affected, connected store.
///
/// Stores are processed sequentially, each to completion, within the
/// triggering call. A failure for one store is caught, logged, and never
/// stops the remaining stores.
pub struct ChangeNotifier<'a> {
    exporter: &'a ProductExporter<'a>,
    stores: &'a dyn StoreRegistry,
    connections: &'a dyn ConnectionRegistry,
    client: &'a dyn ExportClient,
}

impl<'a> ChangeNotifier<'a> {
    pub fn new(
        exporter: &'a ProductExporter<'a>,
        stores: &'a dyn StoreRegistry,
        connections: &'a dyn ConnectionRegistry,
        client: &'a dyn ExportClient,
    ) -> Self {
        Self {
            exporter,
            stores,
            connections,
            client,
        }
    }

    /// Handle a save event from the bus. Fire-and-forget: always returns a
    /// summary, never an error.
    pub fn handle(&self, event: &EntrySaved) -> NotifySummary {
        self.on_entry_saved(event.entry_id, event.scope)
    }

    /// Re-sync one entry for the stores named by `scope`.
    pub fn on_entry_saved(&self, entry_id: EntryId, scope: StoreScope) -> NotifySummary {
        let affected = match scope {
            StoreScope::AllStores => self.stores.all_stores(),
            StoreScope::Store(id) => match self.stores.store(id) {
                Some(store) => vec![store],
                None => {
                    tracing::warn!(%entry_id, store_id = %id, "save event for unknown store, nothing to notify");
                    Vec::new()
                }
            },
        };

        let outcomes = affected
            .iter()
            .map(|store| self.notify_store(entry_id, store))
            .collect();
        NotifySummary { outcomes }
    }

    fn notify_store(&self, entry_id: EntryId, store: &Store) -> StoreOutcome {
        match self.try_notify(entry_id, store) {
            Ok(outcome) => {
                match &outcome {
                    StoreOutcome::Dispatched { store } => {
                        tracing::info!(%entry_id, store_id = %store, "re-index request dispatched");
                    }
                    StoreOutcome::Skipped { store, reason } => {
                        tracing::debug!(%entry_id, store_id = %store, ?reason, "store skipped");
                    }
                    StoreOutcome::Failed { .. } => {}
                }
                outcome
            }
            Err(error) => {
                tracing::error!(
                    %entry_id,
                    store_id = %store.id,
                    error = format!("{error:#}"),
                    "re-index notification failed for store"
                );
                StoreOutcome::Failed {
                    store: store.id,
                    error: format!("{error:#}"),
                }
            }
        }
    }

    fn try_notify(&self, entry_id: EntryId, store: &Store) -> anyhow::Result<StoreOutcome> {
        let connection = match self
            .connections
            .connection(store.id)
            .context("resolving connection")?
        {
            None => {
                return Ok(StoreOutcome::Skipped {
                    store: store.id,
                    reason: SkipReason::NoConnection,
                });
            }
            Some(connection) if !connection.is_connected() => {
                return Ok(StoreOutcome::Skipped {
                    store: store.id,
                    reason: SkipReason::NotConnected,
                });
            }
            Some(connection) => connection,
        };

        let product = self
            .exporter
            .build_product(entry_id, Some(store.id))
            .context("building product record")?;

        self.client
            .reindex(&ReindexRequest {
                product,
                connection,
            })
            .context("dispatching re-index request")?;

        Ok(StoreOutcome::Dispatched { store: store.id })
    }
}
