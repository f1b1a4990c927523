//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no rendering or physics dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use motorika_core::commands::PlayerCommand;
use motorika_core::components::{FishContainer, Heading, Health};
use motorika_core::config::{RodConfig, SessionLayout, UpgradeKind};
use motorika_core::constants::MAX_TIME_SCALE;
use motorika_core::enums::{ActionType, DockKind, GamePhase};
use motorika_core::error::ConfigError;
use motorika_core::events::GameEvent;
use motorika_core::state::GameStateSnapshot;
use motorika_core::types::{Contact, Position, SimTime, Velocity};
use motorika_fishing::{ProximitySelector, SkillCheckConfig};

use crate::challenge::Challenge;
use crate::error::CommandError;
use crate::persistence::{SaveData, SavedPosition};
use crate::scenario;
use crate::shop::Shop;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    layout: SessionLayout,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    contacts: VecDeque<Contact>,
    events: Vec<GameEvent>,

    // --- Session ---
    rod: RodConfig,
    money: u32,
    action: ActionType,
    challenge: Challenge,
    fishing_spots: ProximitySelector<u32>,
    docks: ProximitySelector<u32>,
    shop: Shop,
}

impl SimulationEngine {
    /// Create an engine playing the built-in layout.
    pub fn new(config: SimConfig) -> Self {
        Self::build(config, scenario::default_layout())
    }

    /// Create an engine playing `layout`, which must validate.
    pub fn with_layout(config: SimConfig, layout: SessionLayout) -> Result<Self, ConfigError> {
        layout.validate()?;
        Ok(Self::build(config, layout))
    }

    fn build(config: SimConfig, layout: SessionLayout) -> Self {
        let time_scale = if config.time_scale.is_finite() {
            config.time_scale.clamp(0.0, MAX_TIME_SCALE)
        } else {
            1.0
        };
        Self {
            world: World::new(),
            rod: layout.rod.clone(),
            layout,
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            contacts: VecDeque::new(),
            events: Vec::new(),
            money: 0,
            action: ActionType::default(),
            challenge: Challenge::default(),
            fishing_spots: ProximitySelector::default(),
            docks: ProximitySelector::default(),
            shop: Shop::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Report a physics contact against the ship. Applied during the next
    /// active tick; contacts reported outside active play are dropped.
    pub fn report_contact(&mut self, contact: Contact) {
        self.contacts.push_back(contact);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
        } else if !self.contacts.is_empty() {
            debug!(count = self.contacts.len(), phase = ?self.phase, "dropping contacts");
            self.contacts.clear();
        }

        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            time: self.time,
            phase: self.phase,
            money: self.money,
            action: self.action,
            challenge: &self.challenge,
            active_fishing_spot: self.fishing_spots.active().copied(),
            active_dock: self.docks.active().copied(),
            shop: &self.shop,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn layout(&self) -> &SessionLayout {
        &self.layout
    }

    /// The rod currently fitted.
    pub fn rod(&self) -> &RodConfig {
        &self.rod
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn action(&self) -> ActionType {
        self.action
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn fishing_spots(&self) -> &ProximitySelector<u32> {
        &self.fishing_spots
    }

    pub fn docks(&self) -> &ProximitySelector<u32> {
        &self.docks
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    // ---- Persistence ----

    /// Current ship position and heading, if a session is running.
    pub fn saved_position(&self) -> Option<SavedPosition> {
        let ship = systems::find_ship(&self.world)?;
        let position = *self.world.get::<&Position>(ship).ok()?;
        let heading = self.world.get::<&Heading>(ship).ok()?.0;
        Some(SavedPosition { position, heading })
    }

    /// Move the ship to a saved position and stop it.
    pub fn apply_position(&mut self, saved: SavedPosition) -> Result<(), CommandError> {
        let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
        let (pos, vel, heading) = self
            .world
            .query_one_mut::<(&mut Position, &mut Velocity, &mut Heading)>(ship)
            .map_err(|_| CommandError::NoShip)?;
        *pos = saved.position;
        *vel = Velocity::default();
        heading.0 = saved.heading;
        Ok(())
    }

    /// Capture the session for the host to store under
    /// [`save_key`](crate::persistence::save_key).
    pub fn save_data(&self) -> Result<SaveData, CommandError> {
        let ship = self.saved_position().ok_or(CommandError::NoShip)?;
        let health = systems::find_ship(&self.world)
            .and_then(|e| self.world.get::<&Health>(e).ok().map(|h| h.current))
            .ok_or(CommandError::NoShip)?;
        Ok(SaveData {
            scene: self.layout.scene.clone(),
            ship,
            health,
            money: self.money,
            purchased: self.shop.purchased(),
        })
    }

    /// Resume from save data written for this scene. Requires a started
    /// session. Upgrades not listed in the save are undone. A saved health of
    /// zero or less comes back as full health.
    pub fn load_save(&mut self, data: &SaveData) -> Result<(), CommandError> {
        if self.phase == GamePhase::MainMenu {
            return Err(CommandError::WrongPhase(self.phase));
        }
        data.check_scene(&self.layout.scene)?;

        self.close_challenge();
        self.reset_upgrades()?;
        for kind in self.shop.restore_purchased(&data.purchased) {
            self.apply_upgrade(kind)?;
        }
        self.apply_position(data.ship)?;

        let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
        {
            let mut health = self
                .world
                .get::<&mut Health>(ship)
                .map_err(|_| CommandError::NoShip)?;
            health.current = if data.health <= 0 {
                health.max
            } else {
                data.health.min(health.max)
            };
            self.events.push(GameEvent::HealthChanged {
                current: health.current,
                max: health.max,
            });
        }

        self.money = data.money;
        if self.phase == GamePhase::Wrecked {
            self.phase = GamePhase::Active;
        }
        info!(scene = %data.scene, money = data.money, "save loaded");
        Ok(())
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command.clone()) {
                warn!(?command, %err, "command rejected");
                self.events.push(GameEvent::CommandRejected {
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), CommandError> {
        match command {
            PlayerCommand::StartSession => {
                if self.phase != GamePhase::MainMenu {
                    return Err(CommandError::WrongPhase(self.phase));
                }
                self.start_session()
            }
            PlayerCommand::RestoreShip => {
                if self.phase != GamePhase::Wrecked {
                    return Err(CommandError::WrongPhase(self.phase));
                }
                systems::restore::run(
                    &mut self.world,
                    self.layout.ship.restored_health_fraction,
                    &mut self.events,
                )?;
                self.phase = GamePhase::Active;
                Ok(())
            }
            PlayerCommand::SetVelocity { x, y } => {
                self.require_active()?;
                let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
                let mut vel = self
                    .world
                    .get::<&mut Velocity>(ship)
                    .map_err(|_| CommandError::NoShip)?;
                *vel = Velocity::new(x, y);
                Ok(())
            }
            PlayerCommand::PressAction => {
                self.require_active()?;
                self.press_action()
            }
            PlayerCommand::AcceptFish => {
                self.require_active()?;
                systems::fishing::accept(&self.world, &mut self.challenge, &mut self.events)
            }
            PlayerCommand::DeclineFish => {
                self.require_active()?;
                systems::fishing::decline(&mut self.challenge, &mut self.events)
            }
            PlayerCommand::BuyUpgrade { upgrade_id } => {
                self.require_active()?;
                self.buy_upgrade(upgrade_id)
            }
            PlayerCommand::SetTimeScale { scale } => {
                if !scale.is_finite() || scale < 0.0 {
                    return Err(CommandError::InvalidTimeScale(scale));
                }
                self.time_scale = scale.min(MAX_TIME_SCALE);
                Ok(())
            }
            PlayerCommand::Pause => {
                self.require_active()?;
                self.phase = GamePhase::Paused;
                Ok(())
            }
            PlayerCommand::Resume => {
                if self.phase != GamePhase::Paused {
                    return Err(CommandError::WrongPhase(self.phase));
                }
                self.phase = GamePhase::Active;
                Ok(())
            }
        }
    }

    fn require_active(&self) -> Result<(), CommandError> {
        if self.phase == GamePhase::Active {
            Ok(())
        } else {
            Err(CommandError::WrongPhase(self.phase))
        }
    }

    /// Build the world from the layout and begin play.
    fn start_session(&mut self) -> Result<(), CommandError> {
        world_setup::setup_session(&mut self.world, &self.layout);

        self.rod = self.layout.rod.clone();
        self.fishing_spots = ProximitySelector::new(self.rod.radius)?;
        self.docks = ProximitySelector::new(self.layout.ship.interaction_radius)?;
        self.challenge = Challenge::default();
        self.challenge
            .timer
            .set_config(SkillCheckConfig::with_speed(self.rod.speed))?;
        self.shop = Shop::new(self.layout.upgrades.clone());
        self.money = self.layout.starting_money;
        self.action = ActionType::None;
        self.contacts.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;

        info!(scene = %self.layout.scene, "session started");
        Ok(())
    }

    /// Do whatever the action button currently offers.
    fn press_action(&mut self) -> Result<(), CommandError> {
        match self.action {
            ActionType::None => Err(CommandError::NoAction),
            ActionType::FishingChallenge => {
                let spot = self
                    .fishing_spots
                    .active()
                    .copied()
                    .ok_or(CommandError::NoActiveSpot)?;
                systems::fishing::start(&mut self.challenge, spot, &mut self.events)?;
                systems::action_button::switch(
                    &mut self.action,
                    ActionType::CatchFish,
                    &mut self.events,
                );
                Ok(())
            }
            ActionType::CatchFish => {
                systems::fishing::commit(
                    &self.world,
                    &mut self.challenge,
                    &mut self.rng,
                    &mut self.events,
                )?;
                systems::action_button::switch(&mut self.action, ActionType::None, &mut self.events);
                Ok(())
            }
            ActionType::Market => self.sell_fish(),
            ActionType::BoatShop => {
                self.events.push(GameEvent::ShopOpened {
                    kind: DockKind::BoatShop,
                });
                Ok(())
            }
            ActionType::FishingRodShop => {
                self.events.push(GameEvent::ShopOpened {
                    kind: DockKind::FishingRodShop,
                });
                Ok(())
            }
            ActionType::Workshop => {
                let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
                let mut health = self
                    .world
                    .get::<&mut Health>(ship)
                    .map_err(|_| CommandError::NoShip)?;
                systems::damage::repair(&mut health, &mut self.events);
                Ok(())
            }
        }
    }

    /// Empty the hold into the player's wallet.
    fn sell_fish(&mut self) -> Result<(), CommandError> {
        let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
        let mut container = self
            .world
            .get::<&mut FishContainer>(ship)
            .map_err(|_| CommandError::NoShip)?;
        let value = container.value;
        *container = FishContainer::default();
        self.money = self.money.saturating_add(value);
        self.events.push(GameEvent::FishSold {
            value,
            money: self.money,
        });
        Ok(())
    }

    fn buy_upgrade(&mut self, upgrade_id: u32) -> Result<(), CommandError> {
        let swaps_rod = matches!(
            self.shop.offer(upgrade_id).map(|o| &o.kind),
            Some(UpgradeKind::Rod { .. })
        );
        if swaps_rod && self.challenge.is_open() && !self.shop.is_purchased(upgrade_id) {
            return Err(CommandError::ChallengeOpen);
        }

        let kind = self.shop.buy(upgrade_id, &mut self.money)?;
        self.apply_upgrade(kind)?;
        info!(upgrade_id, money = self.money, "upgrade purchased");
        self.events.push(GameEvent::UpgradePurchased {
            upgrade_id,
            money: self.money,
        });
        Ok(())
    }

    fn apply_upgrade(&mut self, kind: UpgradeKind) -> Result<(), CommandError> {
        match kind {
            UpgradeKind::Rod { rod } => {
                self.challenge
                    .timer
                    .set_config(SkillCheckConfig::with_speed(rod.speed))?;
                self.fishing_spots.set_radius(rod.radius)?;
                self.rod = rod;
            }
            UpgradeKind::Hull { max_health } => {
                let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
                let mut health = self
                    .world
                    .get::<&mut Health>(ship)
                    .map_err(|_| CommandError::NoShip)?;
                // A weaker hull never lowers the ceiling.
                let max = health.max.max(max_health);
                let gained = max - health.max;
                health.max = max;
                health.current = (health.current + gained).clamp(0, max);
                self.events.push(GameEvent::HealthChanged {
                    current: health.current,
                    max: health.max,
                });
            }
        }
        Ok(())
    }

    /// Put the rod and hull back to what the layout fits.
    fn reset_upgrades(&mut self) -> Result<(), CommandError> {
        self.rod = self.layout.rod.clone();
        self.challenge
            .timer
            .set_config(SkillCheckConfig::with_speed(self.rod.speed))?;
        self.fishing_spots.set_radius(self.rod.radius)?;

        let ship = systems::find_ship(&self.world).ok_or(CommandError::NoShip)?;
        let mut health = self
            .world
            .get::<&mut Health>(ship)
            .map_err(|_| CommandError::NoShip)?;
        health.max = self.layout.ship.max_health;
        health.current = health.current.min(health.max);
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Movement integration
        systems::movement::run(&mut self.world);
        // 2. Overlap detection into the spot and dock selectors
        systems::proximity::run(
            &self.world,
            &mut self.fishing_spots,
            &mut self.docks,
            &mut self.events,
        );
        // 3. Skill check and challenge linger
        systems::fishing::run(&mut self.challenge, &mut self.events);
        // 4. Contact damage
        if systems::damage::run(&mut self.world, &mut self.contacts, &mut self.events) {
            self.wreck();
            return;
        }
        // 5. Action button
        systems::action_button::run(
            &self.world,
            &self.challenge,
            self.docks.active().copied(),
            self.fishing_spots.active().copied(),
            &mut self.action,
            &mut self.events,
        );
    }

    /// Health hit zero: stop the ship and drop any open challenge.
    fn wreck(&mut self) {
        self.phase = GamePhase::Wrecked;
        self.close_challenge();
        if let Some(ship) = systems::find_ship(&self.world) {
            if let Ok(mut vel) = self.world.get::<&mut Velocity>(ship) {
                *vel = Velocity::default();
            }
        }
    }

    /// Abandon an open challenge and clear the action button.
    fn close_challenge(&mut self) {
        if self.challenge.is_open() {
            self.challenge.abandon();
            self.events.push(GameEvent::ChallengeClosed);
        }
        systems::action_button::switch(&mut self.action, ActionType::None, &mut self.events);
    }
}
