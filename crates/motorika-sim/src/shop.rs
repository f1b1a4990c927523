//! Upgrade catalogue and purchase bookkeeping.

use std::collections::BTreeSet;

use tracing::warn;

use motorika_core::config::{UpgradeKind, UpgradeOffer};
use motorika_core::enums::UpgradeStatus;
use motorika_core::error::ShopError;
use motorika_core::state::UpgradeView;

#[derive(Debug, Clone, Default)]
pub struct Shop {
    offers: Vec<UpgradeOffer>,
    purchased: BTreeSet<u32>,
}

impl Shop {
    pub fn new(offers: Vec<UpgradeOffer>) -> Self {
        Self {
            offers,
            purchased: BTreeSet::new(),
        }
    }

    pub fn offer(&self, upgrade_id: u32) -> Option<&UpgradeOffer> {
        self.offers.iter().find(|o| o.id == upgrade_id)
    }

    /// Button state of an offer given the player's money.
    pub fn status(&self, offer: &UpgradeOffer, money: u32) -> UpgradeStatus {
        if self.purchased.contains(&offer.id) {
            UpgradeStatus::Purchased
        } else if money >= offer.cost {
            UpgradeStatus::Available
        } else {
            UpgradeStatus::NoMoney
        }
    }

    /// Buy an offer, deducting its cost. Returns what the upgrade changes.
    pub fn buy(&mut self, upgrade_id: u32, money: &mut u32) -> Result<UpgradeKind, ShopError> {
        let offer = self
            .offer(upgrade_id)
            .ok_or(ShopError::UnknownUpgrade(upgrade_id))?;

        match self.status(offer, *money) {
            UpgradeStatus::Purchased => Err(ShopError::AlreadyPurchased(upgrade_id)),
            UpgradeStatus::NoMoney => Err(ShopError::InsufficientFunds {
                cost: offer.cost,
                money: *money,
            }),
            UpgradeStatus::Available => {
                let kind = offer.kind.clone();
                *money -= offer.cost;
                self.purchased.insert(upgrade_id);
                Ok(kind)
            }
        }
    }

    pub fn is_purchased(&self, upgrade_id: u32) -> bool {
        self.purchased.contains(&upgrade_id)
    }

    /// Purchased ids in ascending order.
    pub fn purchased(&self) -> Vec<u32> {
        self.purchased.iter().copied().collect()
    }

    /// Mark previously bought upgrades as owned without charging for them.
    /// Returns the kinds to re-apply, in catalogue order. Unknown ids are
    /// skipped.
    pub fn restore_purchased(&mut self, ids: &[u32]) -> Vec<UpgradeKind> {
        for id in ids {
            if self.offer(*id).is_none() {
                warn!(upgrade_id = id, "saved upgrade not in catalogue");
            }
        }
        self.purchased = ids
            .iter()
            .copied()
            .filter(|id| self.offer(*id).is_some())
            .collect();
        self.offers
            .iter()
            .filter(|o| self.purchased.contains(&o.id))
            .map(|o| o.kind.clone())
            .collect()
    }

    pub fn views(&self, money: u32) -> Vec<UpgradeView> {
        self.offers
            .iter()
            .map(|offer| UpgradeView {
                upgrade_id: offer.id,
                name: offer.name.clone(),
                cost: offer.cost,
                status: self.status(offer, money),
            })
            .collect()
    }
}
