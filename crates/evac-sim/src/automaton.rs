//! The `Automaton` struct and its tick loop.

use evac_agent::{PedestrianParams, PedestrianStore};
use evac_behavior::{AutomatonView, MovementModel};
use evac_core::{AgentId, Grid, GridDims, Location, Scenario, SimClock, SimRng, Tick};
use evac_space::{ExitIndex, StaticFloorField};
use evac_stats::{Statistics, summarize};

use crate::{AutomatonConfig, AutomatonObserver, Occupancy, SimError, SimResult, TickReport};

/// Rejection-sampling attempts per requested pedestrian before bulk placement
/// falls back to drawing from the explicit free-cell list.
const PLACEMENT_RETRIES_PER_AGENT: usize = 32;

// ── Automaton ─────────────────────────────────────────────────────────────────

/// The evacuation cellular automaton.
///
/// `Automaton<M, S>` owns the occupancy buffers, every pedestrian, and the
/// single [`SimRng`].  The floor field and exit index are built once by
/// [`AutomatonBuilder`][crate::AutomatonBuilder] and never change.
///
/// Each [`step`](Self::step):
///
/// 1. Clear `next`.
/// 2. Shuffle the active pedestrians (Fisher–Yates via `SimRng`).
/// 3. For each pedestrian in that order:
///    - on an exit cell: stamp the exit tick, move to the evacuated set;
///    - otherwise ask `M` for a destination.  An unclaimed destination is
///      claimed in `next` and the pedestrian moves; a claimed one means the
///      pedestrian stays and a conflict is counted.  No destination means
///      the pedestrian stays.
/// 4. Swap `current`/`next` and advance the clock.
///
/// The first claimant in shuffle order wins a contested cell.
pub struct Automaton<M: MovementModel, S: Scenario> {
    pub(crate) config:      AutomatonConfig,
    pub(crate) clock:       SimClock,
    pub(crate) scenario:    S,
    pub(crate) floor_field: StaticFloorField,
    pub(crate) exits:       ExitIndex,
    pub(crate) occupancy:   Occupancy,
    pub(crate) pedestrians: PedestrianStore,
    pub(crate) model:       M,
    pub(crate) rng:         SimRng,
    /// Set once the tick-0 snapshot has gone out, so repeated `run*` calls
    /// before the first step do not repeat it.
    pub(crate) tick_zero_snapshot_sent: bool,
}

impl<M: MovementModel, S: Scenario> Automaton<M, S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// The tick the next [`step`](Self::step) will compute.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn dims(&self) -> GridDims {
        self.occupancy.dims()
    }

    pub fn scenario(&self) -> &S {
        &self.scenario
    }

    pub fn floor_field(&self) -> &StaticFloorField {
        &self.floor_field
    }

    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    pub fn pedestrians(&self) -> &PedestrianStore {
        &self.pedestrians
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// `(id, location)` of every active pedestrian, in store order.
    pub fn positions(&self) -> impl Iterator<Item = (AgentId, Location)> + '_ {
        self.pedestrians.active().iter().map(|p| (p.id(), p.location()))
    }

    /// No active pedestrians left, or the time limit is reached.
    pub fn is_finished(&self) -> bool {
        self.pedestrians.active_len() == 0 || self.clock.has_reached(self.config.time_limit_secs)
    }

    /// Summary of the run so far.
    pub fn statistics(&self) -> Statistics {
        summarize(
            self.pedestrians.evacuated(),
            self.pedestrians.active(),
            &self.exits,
            self.config.seconds_per_tick,
            self.config.cell_size_m,
        )
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Place one pedestrian at `(row, col)`.
    ///
    /// Out-of-range coordinates and invalid parameters are errors.  A blocked
    /// or occupied target returns `Ok(false)` and changes nothing.
    pub fn add_pedestrian(
        &mut self,
        row:    usize,
        col:    usize,
        params: PedestrianParams,
    ) -> SimResult<bool> {
        let loc = self.dims().check(row, col)?;
        params.validate()?;
        if self.scenario.is_cell_blocked(row, col) || self.occupancy.is_occupied(loc) {
            return Ok(false);
        }
        self.place(loc, params);
        Ok(true)
    }

    /// Place `n` pedestrians on uniformly random spawnable cells.
    ///
    /// Spawnable cells are the ones [`add_pedestrian`](Self::add_pedestrian)
    /// accepts: not blocked and not occupied.  Exit cells qualify.  If `n`
    /// exceeds their number nothing is placed and [`SimError::Capacity`] is
    /// returned.  Otherwise cells are rejection-sampled under a retry budget;
    /// when the budget runs out the rest are drawn from a shuffled list of
    /// the cells still spawnable.
    ///
    /// `params` is called once per pedestrian, after its cell is chosen.
    /// Every cell and parameter set is chosen and validated before any
    /// pedestrian is committed, so an error leaves the automaton unchanged.
    pub fn add_pedestrians_uniformly<F>(&mut self, n: usize, mut params: F) -> SimResult<()>
    where
        F: FnMut(&mut SimRng) -> PedestrianParams,
    {
        let mut taken = self.occupancy.current().clone();
        let available = self.spawnable_cells(&taken).count();
        if n > available {
            return Err(SimError::Capacity { requested: n, available });
        }

        let dims = self.dims();
        let budget = n.saturating_mul(PLACEMENT_RETRIES_PER_AGENT);
        let mut planned: Vec<(Location, PedestrianParams)> = Vec::with_capacity(n);
        let mut attempts = 0;

        while planned.len() < n && attempts < budget {
            attempts += 1;
            let loc = Location::new(
                self.rng.gen_range(0..dims.rows()),
                self.rng.gen_range(0..dims.cols()),
            );
            if !self.is_spawnable(&taken, loc) {
                continue;
            }
            let p = params(&mut self.rng);
            p.validate()?;
            taken[loc] = true;
            planned.push((loc, p));
        }

        if planned.len() < n {
            let mut free: Vec<Location> = self.spawnable_cells(&taken).collect();
            self.rng.shuffle(&mut free);
            tracing::debug!(
                planned = planned.len(),
                remaining = n - planned.len(),
                free = free.len(),
                "placement retry budget exhausted; drawing from free-cell list"
            );
            for loc in free.into_iter().take(n - planned.len()) {
                let p = params(&mut self.rng);
                p.validate()?;
                planned.push((loc, p));
            }
        }

        for (loc, p) in planned {
            self.place(loc, p);
        }
        tracing::debug!(n, attempts, active = self.pedestrians.active_len(), "placed pedestrians uniformly");
        Ok(())
    }

    fn place(&mut self, loc: Location, params: PedestrianParams) -> AgentId {
        let id = self.pedestrians.spawn(loc, params);
        self.occupancy.occupy(loc);
        id
    }

    fn is_spawnable(&self, taken: &Grid<bool>, loc: Location) -> bool {
        !self.scenario.is_cell_blocked(loc.row, loc.col) && !taken[loc]
    }

    fn spawnable_cells<'a>(&'a self, taken: &'a Grid<bool>) -> impl Iterator<Item = Location> + 'a {
        self.dims().locations().filter(move |&loc| self.is_spawnable(taken, loc))
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the automaton by exactly one tick.
    pub fn step(&mut self) -> SimResult<TickReport> {
        let now = self.clock.current_tick;
        let mut report = TickReport::new(now);

        let mut active = self.pedestrians.take_active();
        self.rng.shuffle(&mut active);

        let mut survivors = Vec::with_capacity(active.len());
        {
            let (current, mut claims) = self.occupancy.begin_tick();
            let view = AutomatonView::new(
                now,
                self.config.neighbourhood,
                &self.scenario,
                &self.floor_field,
                current,
            );

            for mut ped in active {
                let here = ped.location();

                if view.is_exit(here) {
                    ped.mark_evacuated(now);
                    tracing::debug!(agent = %ped.id(), tick = %now, steps = ped.steps(), "evacuated");
                    self.pedestrians.push_evacuated(ped);
                    report.evacuated += 1;
                    continue;
                }

                let target = self
                    .model
                    .choose_movement(&ped, &view, &mut self.rng)
                    .filter(|&dest| admissible(&view, here, dest, ped.id()));

                match target {
                    Some(dest) if claims.claim(dest) => {
                        ped.move_to(dest);
                        report.moved += 1;
                    }
                    Some(_) => {
                        let stayed = claims.claim(here);
                        debug_assert!(stayed, "{here} claimed while {} stood on it", ped.id());
                        report.stayed += 1;
                        report.conflicts += 1;
                    }
                    None => {
                        let stayed = claims.claim(here);
                        debug_assert!(stayed, "{here} claimed while {} stood on it", ped.id());
                        report.stayed += 1;
                    }
                }
                survivors.push(ped);
            }
        }

        self.pedestrians.restore_active(survivors);
        self.occupancy.swap();
        self.clock.advance();

        report.active = self.pedestrians.active_len();
        tracing::trace!(%report, "tick complete");
        Ok(report)
    }

    /// Step until [`is_finished`](Self::is_finished).
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: AutomatonObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        self.run_while(|_| true, observer)
    }

    /// Step while `keep_going` holds and the automaton is not finished.
    ///
    /// `keep_going` is checked before every tick.
    pub fn run_while<O, P>(&mut self, mut keep_going: P, observer: &mut O) -> SimResult<()>
    where
        O: AutomatonObserver,
        P: FnMut(&Self) -> bool,
    {
        self.initial_snapshot(observer);
        while !self.is_finished() && keep_going(self) {
            self.observed_step(observer)?;
        }
        tracing::info!(
            tick = %self.tick(),
            evacuated = self.pedestrians.evacuated_len(),
            remaining = self.pedestrians.active_len(),
            "run finished"
        );
        observer.on_run_end(self.tick());
        Ok(())
    }

    /// Run exactly `n` ticks from the current position, ignoring the
    /// terminal condition.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: AutomatonObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        self.initial_snapshot(observer);
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    fn initial_snapshot<O: AutomatonObserver>(&mut self, observer: &mut O) {
        if self.tick() == Tick::ZERO
            && self.config.output_interval_ticks > 0
            && !self.tick_zero_snapshot_sent
        {
            observer.on_snapshot(Tick::ZERO, &self.pedestrians);
            self.tick_zero_snapshot_sent = true;
        }
    }

    fn observed_step<O: AutomatonObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.tick();
        observer.on_tick_start(now);
        let report = self.step()?;
        observer.on_tick_end(now, &report);

        let settled = self.tick();
        if self.config.output_interval_ticks > 0
            && settled.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(settled, &self.pedestrians);
        }
        Ok(report)
    }
}

/// Guard against models that return cells the decision rule never would.
/// Such a choice is treated as "stay".
fn admissible(view: &AutomatonView<'_>, here: Location, dest: Location, agent: AgentId) -> bool {
    let ok = view.dims().contains(dest.row, dest.col)
        && view.neighbours(here).contains(&dest)
        && view.is_free(dest);
    if !ok {
        tracing::warn!(%agent, from = %here, to = %dest, "movement model chose an inadmissible cell; staying");
    }
    ok
}
