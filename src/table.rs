use std::collections::BTreeMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::{Texture, TextureAtlas};
use crate::camera::{Camera, Point};
use crate::config::TableConfig;
use crate::consts::{DECK_Y, GAME_HEIGHT, GAME_WIDTH, HAND_SIZE, TABLE_STACK_MAX};
use crate::entity::{EntityId, Stage, create_card_entity, set_interactive, set_non_interactive};
use crate::error::TableError;
use crate::hit;
use crate::layout::{Coord, Seat, deck_x, hand_slot_coord, held_coord, table_anchor};
use crate::motion;
use crate::protocol::{GameEvent, Intent};
use crate::render;
use crate::snapshot::{CardId, Player, Region, RegionSet, Snapshot};
use crate::tween::Sequencer;

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Lifecycle of the table. Every handler returns to `Ready` synchronously;
/// only the tweens it starts outlive the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableState {
    /// Waiting for the texture atlas; no entity exists yet.
    Uninitialized,
    Ready,
}

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Push an intent to the server.
    Send(Intent),
    SetCursor(String),
}

/// Which stage entity plays which role on the table.
#[derive(Debug, Default)]
pub struct Registry {
    deck: Option<EntityId>,
    /// Index 0 is the top card.
    table: Vec<EntityId>,
    held: Option<EntityId>,
    hands: BTreeMap<Seat, [EntityId; HAND_SIZE]>,
}

impl Registry {
    #[must_use]
    pub fn deck(&self) -> Option<EntityId> {
        self.deck
    }

    /// The table stack, top first.
    #[must_use]
    pub fn table(&self) -> &[EntityId] {
        &self.table
    }

    #[must_use]
    pub fn held(&self) -> Option<EntityId> {
        self.held
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> Option<&[EntityId; HAND_SIZE]> {
        self.hands.get(&seat)
    }

    /// Number of hand entities across every seat.
    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hands.len() * HAND_SIZE
    }
}

/// Core table state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Table` so it can be tested without WASM/browser dependencies.
pub struct TableCore {
    pub config: TableConfig,
    pub camera: Camera,
    snapshot: Snapshot,
    atlas: Option<TextureAtlas>,
    stage: Stage,
    sequencer: Sequencer,
    registry: Registry,
    hovering: bool,
}

impl TableCore {
    #[must_use]
    pub fn new(config: TableConfig, snapshot: Snapshot) -> Self {
        Self {
            config,
            camera: Camera::default(),
            snapshot,
            atlas: None,
            stage: Stage::new(),
            sequencer: Sequencer::new(),
            registry: Registry::default(),
            hovering: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> TableState {
        if self.atlas.is_some() { TableState::Ready } else { TableState::Uninitialized }
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    // --- Clock ---

    /// Bring the sequencer clock up to `now_ms` so tweens started by the
    /// next handler begin now.
    pub fn sync_clock(&mut self, now_ms: f64) {
        self.sequencer.sync_clock(now_ms);
    }

    /// Advance every running tween to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        self.sequencer.tick(now_ms, &mut self.stage);
    }

    /// Update the CSS size the canvas is displayed at.
    pub fn set_viewport(&mut self, css_width: f64, css_height: f64) {
        self.camera = Camera::fit(css_width, css_height);
    }

    // --- Initialization ---

    /// Build the initial registry from the current snapshot, without
    /// animation.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingTexture`] if the atlas lacks a card the
    /// snapshot shows. Nothing is built in that case.
    pub fn on_assets_loaded(&mut self, atlas: TextureAtlas) -> Result<(), TableError> {
        if self.atlas.is_some() {
            log::warn!("assets already loaded; ignoring second atlas");
            return Ok(());
        }

        let deck = atlas.get(&CardId::deck_back())?;
        let mut table = Vec::new();
        let mut hands = Vec::new();
        let mut held = None;
        if self.snapshot.round_started() {
            table = textures_for(&atlas, self.snapshot.visible_table_cards())?;
            for player in &self.snapshot.players {
                hands.push((player.position, visible_hand(&atlas, player)?));
                if let Some(card) = &player.held_card {
                    held = Some((player.position, atlas.get(card)?));
                }
            }
        }

        let deck_x = deck_x(self.snapshot.round_started());
        let anchor = table_anchor();
        self.registry.deck = Some(self.stage.add(create_card_entity(deck, deck_x, DECK_Y, 0.0)));

        // bottom card first so the top draws last
        for texture in table.into_iter().rev() {
            let id = self.stage.add(create_card_entity(texture, anchor.x, anchor.y, 0.0));
            self.registry.table.insert(0, id);
        }

        for (seat, textures) in hands {
            let ids = self.add_hand(seat, textures);
            self.registry.hands.insert(seat, ids);
        }

        if let Some((seat, texture)) = held {
            self.registry.held = Some(self.add_at(texture, held_coord(seat)));
        }

        self.atlas = Some(atlas);
        let regions = self.snapshot.playable_cards.clone();
        self.apply_interactivity(&regions);
        log::debug!(
            "table ready: {} entities, {} hands, {} table cards",
            self.stage.len(),
            self.registry.hands.len(),
            self.registry.table.len()
        );
        Ok(())
    }

    // --- Server events ---

    /// Deal a new round: every seat's hand flies in from the deck, then the
    /// deck slides aside and the table stack is revealed.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AssetsNotLoaded`] before the atlas resolves, or
    /// [`TableError::MissingTexture`] for an unknown card.
    pub fn on_round_start(&mut self, snapshot: Snapshot) -> Result<(), TableError> {
        let atlas = self.atlas.as_ref().ok_or(TableError::AssetsNotLoaded)?;
        let deck = self.registry.deck.ok_or(TableError::AssetsNotLoaded)?;
        let table = textures_for(atlas, snapshot.visible_table_cards())?;
        let hands = snapshot
            .players
            .iter()
            .map(|player| Ok((player.position, visible_hand(atlas, player)?)))
            .collect::<Result<Vec<_>, TableError>>()?;

        self.snapshot = snapshot;

        // seats that left the table
        let seated: Vec<Seat> = hands.iter().map(|(seat, _)| *seat).collect();
        for seat in Seat::ALL.into_iter().filter(|s| !seated.contains(s)) {
            if let Some(ids) = self.registry.hands.remove(&seat) {
                for id in ids {
                    self.retire(id);
                }
            }
        }

        if let Some(held) = self.registry.held.take() {
            self.retire(held);
        }

        self.conform_table(table);
        for id in self.registry.table.iter().rev() {
            motion::tuck_table_card(&mut self.stage, *id);
            self.stage.bring_to_front(*id);
        }
        let mut chain = Some(motion::after_deal(deck, self.registry.table.clone()));

        for (seat, textures) in hands {
            let ids = match self.registry.hands.get(&seat) {
                Some(ids) => {
                    let ids = *ids;
                    for (id, texture) in ids.iter().zip(textures) {
                        let entity = &mut self.stage[*id];
                        entity.texture = texture;
                        entity.visible = true;
                    }
                    ids
                }
                None => {
                    let ids = self.add_hand(seat, textures);
                    self.registry.hands.insert(seat, ids);
                    ids
                }
            };
            motion::deal_hand(&mut self.stage, &mut self.sequencer, seat, &ids, chain.take());
        }

        // nobody to deal to: slide the deck right away
        if let Some(chain) = chain {
            chain(&mut self.sequencer);
        }

        let regions = self.snapshot.playable_cards.clone();
        self.apply_interactivity(&regions);
        log::debug!("round started with {} players", self.registry.hands.len());
        Ok(())
    }

    /// Apply one validated game event against the new snapshot.
    ///
    /// Everything the event needs (player, hand index, textures) is resolved
    /// before the first entity is touched, so a failed event changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AssetsNotLoaded`] before the atlas resolves,
    /// [`TableError::UnknownPlayer`] if the acting player is not in the
    /// snapshot, and the per-event errors of the handlers.
    pub fn on_game_event(&mut self, snapshot: Snapshot, event: GameEvent) -> Result<(), TableError> {
        if self.atlas.is_none() {
            return Err(TableError::AssetsNotLoaded);
        }
        let player = snapshot
            .player(event.player_id())
            .cloned()
            .ok_or(TableError::UnknownPlayer { action: event.action(), player_id: event.player_id() })?;

        match event {
            GameEvent::Flip { hand_index, .. } => self.flip(snapshot, &player, hand_index)?,
            GameEvent::TakeFromDeck { .. } => self.take_from_deck(snapshot, &player)?,
            GameEvent::TakeFromTable { .. } => self.take_from_table(snapshot, &player)?,
            GameEvent::Discard { .. } => self.discard(snapshot, &player)?,
            GameEvent::Swap { hand_index, .. } => self.swap(snapshot, &player, hand_index)?,
        }

        let regions = regions_after(&self.snapshot, &event);
        self.apply_interactivity(&regions);
        log::debug!("applied {} for player {}", event.action(), player.id);
        Ok(())
    }

    fn flip(&mut self, snapshot: Snapshot, player: &Player, index: usize) -> Result<(), TableError> {
        check_index(index)?;
        let texture = self.texture(&player.hand[index].name)?;
        let hand = self.ensure_hand(player)?;

        self.snapshot = snapshot;
        self.stage[hand[index]].texture = texture;
        Ok(())
    }

    fn take_from_deck(&mut self, snapshot: Snapshot, player: &Player) -> Result<(), TableError> {
        let texture = self.held_texture(player)?;
        let deck = self.registry.deck.ok_or(TableError::AssetsNotLoaded)?;

        self.snapshot = snapshot;
        let seat = player.position;
        let held = self.replace_held(texture, seat);
        let deck_x = self.stage[deck].x;
        motion::draw_from_deck(&mut self.stage, &mut self.sequencer, held, seat, deck_x);
        Ok(())
    }

    fn take_from_table(&mut self, snapshot: Snapshot, player: &Player) -> Result<(), TableError> {
        let texture = self.held_texture(player)?;

        self.snapshot = snapshot;
        let seat = player.position;
        let source = match self.registry.table.first().copied() {
            Some(top) => {
                let coord = self.stage[top].transform();
                self.registry.table.remove(0);
                self.retire(top);
                coord
            }
            None => table_anchor(),
        };
        let held = self.replace_held(texture, seat);
        motion::draw_from_table(&mut self.stage, &mut self.sequencer, held, seat, source);
        Ok(())
    }

    fn discard(&mut self, snapshot: Snapshot, player: &Player) -> Result<(), TableError> {
        let stack = self.stack_textures(&snapshot, "discard")?;
        let reveal = if snapshot.is_over() { Some(self.hand_textures(player)?) } else { None };
        let hand = self.ensure_hand(player)?;

        self.snapshot = snapshot;
        let seat = player.position;
        let from = match self.registry.held.take() {
            Some(held) => {
                let coord = self.stage[held].transform();
                self.retire(held);
                coord
            }
            None => held_coord(seat),
        };

        let top = self.push_table_top(stack.0, stack.1);
        motion::discard_to_table(&mut self.stage, &mut self.sequencer, top, seat, from);

        if let Some(textures) = reveal {
            self.retexture_hand(&hand, textures);
        }
        Ok(())
    }

    fn swap(&mut self, snapshot: Snapshot, player: &Player, index: usize) -> Result<(), TableError> {
        check_index(index)?;
        let incoming = self.texture(&player.hand[index].name)?;
        let stack = self.stack_textures(&snapshot, "swap")?;
        let reveal = if snapshot.is_flipped { Some(self.hand_textures(player)?) } else { None };
        let hand = self.ensure_hand(player)?;

        self.snapshot = snapshot;
        let seat = player.position;
        self.stage[hand[index]].texture = incoming;

        let held = self.registry.held.take();
        if let Some(held) = held {
            set_non_interactive(&mut self.stage[held]);
        }
        let top = self.push_table_top(stack.0, stack.1);
        motion::swap_into_hand(&mut self.stage, &mut self.sequencer, seat, index, hand[index], held, top);

        if let Some(textures) = reveal {
            self.retexture_hand(&hand, textures);
        }
        Ok(())
    }

    // --- Pointer input ---

    /// Activate the topmost interactive card under the pointer.
    /// No model change happens here; the server's answer drives the table.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.state() != TableState::Ready {
            log::warn!("pointer down before assets loaded");
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        let Some(id) = hit::hit_test(world, &self.stage) else {
            return Vec::new();
        };
        match self.stage[id].activate() {
            Some(intent) => {
                log::debug!("intent {} {:?}", intent.event_name(), intent.hand_index);
                vec![Action::Send(intent)]
            }
            None => Vec::new(),
        }
    }

    /// Switch the cursor when the pointer enters or leaves an interactive card.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        let hovering = hit::hit_test(world, &self.stage).is_some();
        if hovering == self.hovering {
            return Vec::new();
        }
        self.hovering = hovering;
        let cursor = if hovering { self.config.hover_cursor.clone() } else { "default".to_owned() };
        vec![Action::SetCursor(cursor)]
    }

    // --- Helpers ---

    fn texture(&self, card: &CardId) -> Result<Texture, TableError> {
        self.atlas.as_ref().ok_or(TableError::AssetsNotLoaded)?.get(card)
    }

    fn held_texture(&self, player: &Player) -> Result<Texture, TableError> {
        let card = player.held_card.as_ref().ok_or(TableError::MissingHeldCard(player.id))?;
        self.texture(card)
    }

    /// Every hand card face-up, for end-of-round reveals.
    fn hand_textures(&self, player: &Player) -> Result<Vec<Texture>, TableError> {
        player.hand.iter().map(|card| self.texture(&card.name)).collect()
    }

    /// Textures for the visible stack, top card split out; a placing event
    /// must leave one.
    fn stack_textures(&self, snapshot: &Snapshot, action: &'static str) -> Result<(Texture, Vec<Texture>), TableError> {
        let atlas = self.atlas.as_ref().ok_or(TableError::AssetsNotLoaded)?;
        let mut textures = textures_for(atlas, snapshot.visible_table_cards())?.into_iter();
        let top = textures.next().ok_or(TableError::EmptyTable(action))?;
        Ok((top, textures.collect()))
    }

    /// The seat's hand entities, creating them from the player's visible
    /// cards if this seat has none yet.
    fn ensure_hand(&mut self, player: &Player) -> Result<[EntityId; HAND_SIZE], TableError> {
        if let Some(ids) = self.registry.hands.get(&player.position) {
            return Ok(*ids);
        }
        let atlas = self.atlas.as_ref().ok_or(TableError::AssetsNotLoaded)?;
        let textures = visible_hand(atlas, player)?;
        let ids = self.add_hand(player.position, textures);
        self.registry.hands.insert(player.position, ids);
        Ok(ids)
    }

    fn add_at(&mut self, texture: Texture, coord: Coord) -> EntityId {
        self.stage.add(create_card_entity(texture, coord.x, coord.y, coord.rotation))
    }

    fn add_hand(&mut self, seat: Seat, textures: [Texture; HAND_SIZE]) -> [EntityId; HAND_SIZE] {
        let mut index = 0;
        textures.map(|texture| {
            let id = self.add_at(texture, hand_slot_coord(seat, index));
            index += 1;
            id
        })
    }

    fn retexture_hand(&mut self, hand: &[EntityId; HAND_SIZE], textures: Vec<Texture>) {
        for (id, texture) in hand.iter().zip(textures) {
            self.stage[*id].texture = texture;
        }
    }

    /// Take an entity out of play for good, pending tweens included.
    fn retire(&mut self, id: EntityId) {
        self.stage.retire(id);
    }

    /// Create the held card at the seat's held position, retiring any
    /// previous one.
    fn replace_held(&mut self, texture: Texture, seat: Seat) -> EntityId {
        if let Some(old) = self.registry.held.take() {
            self.retire(old);
        }
        let id = self.add_at(texture, held_coord(seat));
        self.registry.held = Some(id);
        id
    }

    /// Push a new top card, then bring the rest of the stack in line with
    /// `rest` (the cards beneath it, top first).
    fn push_table_top(&mut self, top: Texture, rest: Vec<Texture>) -> EntityId {
        let mut previous = std::mem::take(&mut self.registry.table).into_iter();
        let top = self.add_at(top, table_anchor());

        let mut stack = vec![top];
        for texture in rest {
            let id = match previous.next() {
                Some(id) => {
                    self.stage[id].texture = texture;
                    id
                }
                None => self.add_at(texture, table_anchor()),
            };
            stack.push(id);
        }
        for extra in previous {
            self.retire(extra);
        }
        self.registry.table = stack;
        top
    }

    /// Reuse, create or retire entities so the stack matches `textures`.
    fn conform_table(&mut self, textures: Vec<Texture>) {
        let previous = std::mem::take(&mut self.registry.table);
        let mut previous = previous.into_iter();
        let mut stack = Vec::with_capacity(TABLE_STACK_MAX);
        for texture in textures.into_iter().take(TABLE_STACK_MAX) {
            let id = match previous.next() {
                Some(id) => {
                    self.stage[id].texture = texture;
                    id
                }
                None => self.add_at(texture, table_anchor()),
            };
            stack.push(id);
        }
        for extra in previous {
            self.retire(extra);
        }
        self.registry.table = stack;
    }

    /// Attach or clear activation on every registry entity, from `regions`
    /// alone.
    fn apply_interactivity(&mut self, regions: &RegionSet) {
        let local = self.snapshot.player_id;
        let local_seat = self.snapshot.player(local).map(|p| p.position);

        if let Some(deck) = self.registry.deck {
            toggle(&mut self.stage, deck, regions.contains(&Region::Deck), move || Intent::deck(local));
        }
        for (depth, id) in self.registry.table.iter().enumerate() {
            let playable = depth == 0 && regions.contains(&Region::Table);
            toggle(&mut self.stage, *id, playable, move || Intent::table(local));
        }
        if let Some(held) = self.registry.held {
            toggle(&mut self.stage, held, regions.contains(&Region::Held), move || Intent::held(local));
        }
        for (seat, ids) in &self.registry.hands {
            let own = Some(*seat) == local_seat;
            for (index, id) in ids.iter().enumerate() {
                let playable = own && regions.contains(&Region::Hand(index));
                toggle(&mut self.stage, *id, playable, move || Intent::hand(local, index));
            }
        }
    }
}

fn toggle(stage: &mut Stage, id: EntityId, playable: bool, on_activate: impl Fn() -> Intent + 'static) {
    if playable {
        set_interactive(&mut stage[id], on_activate);
    } else {
        set_non_interactive(&mut stage[id]);
    }
}

fn check_index(index: usize) -> Result<(), TableError> {
    if index < HAND_SIZE { Ok(()) } else { Err(TableError::HandIndexOutOfRange(index)) }
}

fn textures_for(atlas: &TextureAtlas, cards: &[CardId]) -> Result<Vec<Texture>, TableError> {
    cards.iter().map(|card| atlas.get(card)).collect()
}

fn visible_hand(atlas: &TextureAtlas, player: &Player) -> Result<[Texture; HAND_SIZE], TableError> {
    let [a, b, c, d, e, f] = &player.hand;
    Ok([
        atlas.get(&a.visible_name())?,
        atlas.get(&b.visible_name())?,
        atlas.get(&c.visible_name())?,
        atlas.get(&d.visible_name())?,
        atlas.get(&e.visible_name())?,
        atlas.get(&f.visible_name())?,
    ])
}

/// The regions the local viewer may activate once `event` has been applied.
///
/// The snapshot's `playableCards` is the source of truth; two events adjust
/// it for the acting local player. After drawing, the held card and every
/// hand slot are live and the deck and table are not. After swapping, the
/// hand goes quiet.
#[must_use]
pub fn regions_after(snapshot: &Snapshot, event: &GameEvent) -> RegionSet {
    let mut regions = snapshot.playable_cards.clone();
    if !snapshot.is_local(event.player_id()) {
        return regions;
    }
    match event {
        GameEvent::TakeFromDeck { .. } | GameEvent::TakeFromTable { .. } => {
            regions.remove(&Region::Deck);
            regions.remove(&Region::Table);
            regions.insert(Region::Held);
            regions.extend(Region::hand_slots());
        }
        GameEvent::Swap { .. } => {
            regions.retain(|r| !matches!(r, Region::Hand(_)));
        }
        GameEvent::Flip { .. } | GameEvent::Discard { .. } => {}
    }
    regions
}

/// The full table. Wraps `TableCore` and owns the browser canvas element.
pub struct Table {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sheet: Option<HtmlImageElement>,
    pub core: TableCore,
}

impl Table {
    /// Bind a table to `canvas`, sizing its backing store to the logical canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: TableConfig, snapshot: Snapshot) -> Result<Self, JsValue> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (width, height) = (GAME_WIDTH as u32, GAME_HEIGHT as u32);
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let mut core = TableCore::new(config, snapshot);
        core.set_viewport(f64::from(canvas.client_width()), f64::from(canvas.client_height()));
        Ok(Self { canvas, ctx, sheet: None, core })
    }

    /// Hand over the resolved atlas and its decoded sheet image.
    ///
    /// # Errors
    ///
    /// See [`TableCore::on_assets_loaded`].
    pub fn on_assets_loaded(&mut self, atlas: TextureAtlas, sheet: HtmlImageElement) -> Result<(), TableError> {
        self.core.on_assets_loaded(atlas)?;
        self.sheet = Some(sheet);
        Ok(())
    }

    /// # Errors
    ///
    /// See [`TableCore::on_round_start`].
    pub fn on_round_start(&mut self, now_ms: f64, snapshot: Snapshot) -> Result<(), TableError> {
        self.core.sync_clock(now_ms);
        self.core.on_round_start(snapshot)
    }

    /// # Errors
    ///
    /// See [`TableCore::on_game_event`].
    pub fn on_game_event(&mut self, now_ms: f64, snapshot: Snapshot, event: GameEvent) -> Result<(), TableError> {
        self.core.sync_clock(now_ms);
        self.core.on_game_event(snapshot, event)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.refresh_viewport();
        self.core.on_pointer_down(screen_pt)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.refresh_viewport();
        self.core.on_pointer_move(screen_pt)
    }

    /// Advance tweens and draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
        self.core.tick(now_ms);
        self.render()
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, self.core.stage(), self.sheet.as_ref(), &self.core.config)
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn refresh_viewport(&mut self) {
        let width = f64::from(self.canvas.client_width());
        let height = f64::from(self.canvas.client_height());
        self.core.set_viewport(width, height);
    }
}
