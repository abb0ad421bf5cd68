use super::*;

impl Night {
    /// Runs the night action of `card` for the player in `actor`.
    /// `copied_from` lists the seats a doppelganger chain copied to get here.
    pub(super) fn act(&mut self, actor: usize, card: CardId, copied_from: &[usize]) {
        let kind = self.cards[card.0].kind;
        if !copied_from.is_empty() && WRAP_UP_ROLES.contains(&kind) {
            self.wrap_up.push((actor, card));
            return;
        }
        match kind {
            RoleKind::Villager
            | RoleKind::Werewolf
            | RoleKind::DreamWolf
            | RoleKind::Minion
            | RoleKind::Hunter
            | RoleKind::Bodyguard
            | RoleKind::Tanner
            | RoleKind::Merlin
            | RoleKind::Imposter => {}
            RoleKind::Sentinel => self.sentinel(actor),
            RoleKind::Doppelganger => self.doppelganger(actor, card, copied_from),
            RoleKind::AlphaWolf => self.alpha_wolf(actor, copied_from),
            RoleKind::MysticWolf => self.mystic_wolf(actor, copied_from),
            RoleKind::Mason => self.mason(actor),
            RoleKind::LoverWolf | RoleKind::LoverVillager => self.lover(actor),
            RoleKind::Seer => self.seer(actor, copied_from),
            RoleKind::MadSeer => self.mad_seer(actor, copied_from),
            RoleKind::ApprenticeSeer | RoleKind::LucidWolf => self.peek_center(actor),
            RoleKind::Pi => self.private_investigator(actor, card, copied_from),
            RoleKind::Medium => self.medium(actor, card),
            RoleKind::Robber => self.robber(actor, copied_from),
            RoleKind::Bandit => self.bandit(actor, copied_from),
            RoleKind::Witch => self.witch(actor, copied_from),
            RoleKind::Trickster => self.trickster(actor),
            RoleKind::Troublemaker => self.troublemaker(actor),
            RoleKind::VillageIdiot => self.village_idiot(actor),
            RoleKind::Drunk => self.drunk(actor, false),
            RoleKind::Fool => self.drunk(actor, true),
            RoleKind::Insomniac => self.insomniac(actor),
            RoleKind::Revealer => self.revealer(actor),
            RoleKind::Curator => self.curator(actor),
            RoleKind::God | RoleKind::EnemyOfReason => self.reclaim(actor, card),
        }
    }

    fn sentinel(&mut self, actor: usize) {
        let excluded = self.with_shielded(&[actor]);
        let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng) else {
            self.log.record(actor, "had no one to mark");
            return;
        };
        self.shielded.push(target);
        let during = format!("{} was marked with a shield", self.name(target));
        let after = format!(
            "{} marked {} with a shield",
            self.name(actor),
            self.name(target)
        );
        self.log.broadcast(during, after);
    }

    fn doppelganger(&mut self, actor: usize, card: CardId, copied_from: &[usize]) {
        let mut excluded = self.with_shielded(&[actor]);
        excluded.extend(copied_from);
        let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng) else {
            self.log.record(actor, "had no one to copy");
            return;
        };
        let kind = self.kind_at(target);
        let copy = self.new_card(kind);
        self.cards[card.0].copied = Some(copy);
        let text = format!("doppelganged {}, who was {kind}", self.name(target));
        self.log.record(actor, text);
        self.believed_by_role.entry(kind).or_default().push(actor);

        let mut chain = copied_from.to_vec();
        chain.push(target);
        self.act(actor, copy, &chain);
    }

    /// Prefers targets that are not seen as wolves, or for a copied
    /// action targets other than the copied seats.
    fn nonwolf_targets(&self, actor: usize, copied_from: &[usize]) -> Vec<usize> {
        let anyone: Vec<usize> = (0..self.player_count())
            .filter(|seat| *seat != actor && !self.shielded.contains(seat))
            .collect();
        let preferred: Vec<usize> = if copied_from.is_empty() {
            let wolves = self.players_in_category(SEEN_AS_WOLVES);
            anyone
                .iter()
                .copied()
                .filter(|seat| !wolves.contains(seat))
                .collect()
        } else {
            anyone
                .iter()
                .copied()
                .filter(|seat| !copied_from.contains(seat))
                .collect()
        };
        if preferred.is_empty() {
            anyone
        } else {
            preferred
        }
    }

    fn alpha_wolf(&mut self, actor: usize, copied_from: &[usize]) {
        let targets = self.nonwolf_targets(actor, copied_from);
        let Some(target) = self.rng.pick(&targets) else {
            self.log.record(actor, "turned no one into a wolf");
            return;
        };
        let during = format!("turned {} into a wolf", self.name(target));
        let after = format!(
            "exchanged {} with the wolf-card, which was {}",
            self.name(target),
            self.describe(self.layout[self.wolf_slot()])
        );
        self.log.record_split(actor, during, after);
        let wolf_slot = self.wolf_slot();
        self.rotate(&[target, wolf_slot]);
    }

    fn mystic_wolf(&mut self, actor: usize, copied_from: &[usize]) {
        let targets = self.nonwolf_targets(actor, copied_from);
        let Some(target) = self.rng.pick(&targets) else {
            self.log.record(actor, "looked at no one");
            return;
        };
        let text = format!(
            "looked at {} and saw {}",
            self.name(target),
            self.kind_at(target)
        );
        self.log.record(actor, text);
    }

    fn mason(&mut self, actor: usize) {
        let masons = self.players_in_category(&[RoleKind::Mason]);
        let text = reveal_msg("mason", "masons", &self.players, &masons);
        self.log.tell(actor, text);
    }

    fn lover(&mut self, actor: usize) {
        let lovers = self.players_in_category(LOVERS);
        let text = reveal_msg("lover", "lovers", &self.players, &lovers);
        self.log.tell(actor, text);
    }

    fn seer(&mut self, actor: usize, copied_from: &[usize]) {
        if self.rng.bool(SEER_PLAYER_LOOK_CHANCE) {
            let mut excluded = vec![actor];
            excluded.extend(copied_from);
            excluded.extend(&self.shielded);
            if let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng)
            {
                let text = format!(
                    "looked at {} and saw {}",
                    self.name(target),
                    self.kind_at(target)
                );
                self.log.record(actor, text);
                return;
            }
        }
        let first = self.pick_center(&[]);
        let second = self.pick_center(&[first]);
        for index in [first, second] {
            self.log_center_look(actor, index);
        }
    }

    /// Reports one true look and one hallucinated look in random order.
    /// The hallucination shows a madseer exactly when the true look does.
    fn mad_seer(&mut self, actor: usize, copied_from: &[usize]) {
        let mut excluded = vec![actor];
        excluded.extend(copied_from);
        excluded.extend(&self.shielded);
        let count = self.player_count();
        let Some(truth) = select_target(count, &[&excluded], &mut self.rng) else {
            self.log.record(actor, "had no one to look at");
            return;
        };
        let decoy = select_target(count, &[&[truth], &excluded], &mut self.rng).unwrap_or(truth);

        let true_kind = self.kind_at(truth);
        let wants_madseer = true_kind == RoleKind::MadSeer;
        let candidates: Vec<usize> = (0..count + CENTER_CARDS)
            .filter(|&slot| (self.kind_at(slot) == RoleKind::MadSeer) == wants_madseer)
            .collect();
        let pick = self.rng.pick_index(candidates.len());
        let false_kind = self.kind_at(candidates[pick]);

        let true_look = format!("looked at {} and saw {true_kind}", self.name(truth));
        let mut looks = [
            (true_look.clone(), true_look),
            (
                format!("looked at {} and saw {false_kind}", self.name(decoy)),
                format!("looked at {} and hallucinated {false_kind}", self.name(decoy)),
            ),
        ];
        if self.rng.pick_index(2) == 1 {
            looks.swap(0, 1);
        }
        for (during, after) in looks {
            self.log.record_split(actor, during, after);
        }
    }

    fn peek_center(&mut self, actor: usize) {
        let index = self.pick_center(&[]);
        self.log_center_look(actor, index);
    }

    pub(super) fn log_center_look(&mut self, actor: usize, index: usize) {
        let text = format!(
            "looked at middle card {} and saw {}",
            index + 1,
            self.kind_at(self.center(index))
        );
        self.log.record(actor, text);
    }

    /// Looks at up to two players; stops early by coin flip or on seeing
    /// a suspicious card, whose identity the PI then takes on.
    fn private_investigator(&mut self, actor: usize, card: CardId, copied_from: &[usize]) {
        let mut excluded = self.with_shielded(&[actor]);
        excluded.extend(copied_from);
        for _ in 0..INSPECT_MAX_LOOKS {
            let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng)
            else {
                self.log.record(actor, "had no one to look at");
                break;
            };
            excluded.push(target);
            let seen = self.kind_at(target);
            let text = format!("looked at {} and saw {seen}", self.name(target));
            self.log.record(actor, text);
            if seen.in_category(SUSPICIOUS) {
                self.log.record(actor, format!("became {seen}"));
                self.cards[card.0].copied = Some(self.layout[target]);
                break;
            }
            if self.rng.bool(INSPECT_STOP_CHANCE) {
                break;
            }
        }
    }

    fn medium(&mut self, actor: usize, card: CardId) {
        let mut seen_centers = Vec::new();
        for _ in 0..INSPECT_MAX_LOOKS {
            let index = self.pick_center(&seen_centers);
            seen_centers.push(index);
            let slot = self.center(index);
            let seen = self.kind_at(slot);
            self.log.record(
                actor,
                format!("looked at center card {} and saw {seen}", index + 1),
            );
            if seen.in_category(SUSPICIOUS) {
                self.log.record(actor, format!("became {seen}"));
                self.cards[card.0].copied = Some(self.layout[slot]);
                break;
            }
            if self.rng.bool(INSPECT_STOP_CHANCE) {
                break;
            }
        }
    }

    fn rob_target(&mut self, actor: usize, copied_from: &[usize]) -> Option<usize> {
        if self.shielded.contains(&actor) {
            self.log.record(actor, "did nothing, because they were shielded");
            return None;
        }
        let last = self.with_shielded(&[actor]);
        let target = select_target(self.player_count(), &[copied_from, &last], &mut self.rng);
        if target.is_none() {
            self.log.record(actor, "couldn't rob anyone");
        }
        target
    }

    fn robber(&mut self, actor: usize, copied_from: &[usize]) {
        let Some(target) = self.rob_target(actor, copied_from) else {
            return;
        };
        self.rotate(&[actor, target]);
        let text = format!("stole {} from {}", self.kind_at(actor), self.name(target));
        self.log.record(actor, text);
    }

    /// Takes a player's card and leaves them a center card in its place.
    fn bandit(&mut self, actor: usize, copied_from: &[usize]) {
        let Some(target) = self.rob_target(actor, copied_from) else {
            return;
        };
        let index = self.pick_center(&[]);
        let slot = self.center(index);
        let during = format!(
            "stole {} from {} and gave them middle card {}",
            self.kind_at(target),
            self.name(target),
            index + 1
        );
        let after = format!("{during} which was {}", self.kind_at(slot));
        self.log.record_split(actor, during, after);
        self.rotate(&[target, actor, slot]);
    }

    fn witch(&mut self, actor: usize, copied_from: &[usize]) {
        let index = self.pick_center(&[]);
        let slot = self.center(index);
        let seen = self.kind_at(slot);
        self.log.record(
            actor,
            format!("looked at middle card {} and saw {seen}", index + 1),
        );

        let target = if seen.in_category(EVIL)
            && self.rng.bool(WITCH_SELF_CLAIM_CHANCE)
            && !self.shielded.contains(&actor)
        {
            Some(actor)
        } else {
            let mut first = vec![actor];
            first.extend(copied_from);
            select_target(
                self.player_count(),
                &[&first, &self.shielded],
                &mut self.rng,
            )
        };
        let Some(target) = target else {
            self.log.record(actor, "had no one to give it to");
            return;
        };
        self.rotate(&[target, slot]);
        let text = format!("gave {} role {seen}", self.name(target));
        self.log.record(actor, text);
    }

    fn trickster(&mut self, actor: usize) {
        let excluded = self.with_shielded(&[actor]);
        let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng) else {
            self.log.record(actor, "couldn't switch anybody");
            return;
        };
        let index = self.pick_center(&[]);
        let slot = self.center(index);
        let during = format!(
            "gave the player with role {} the new role {}",
            self.kind_at(target),
            self.kind_at(slot)
        );
        let after = format!(
            "gave {} center card {} which was {}",
            self.name(target),
            index + 1,
            self.kind_at(slot)
        );
        self.log.record_split(actor, during, after);
        self.rotate(&[target, slot]);
    }

    fn troublemaker(&mut self, actor: usize) {
        let count = self.player_count();
        let first_excluded = self.with_shielded(&[actor]);
        let first = select_target(count, &[&first_excluded], &mut self.rng);
        let second = first.and_then(|first| {
            let excluded = self.with_shielded(&[actor, first]);
            select_target(count, &[&excluded], &mut self.rng)
        });
        let (Some(first), Some(second)) = (first, second) else {
            self.log.record(actor, "couldn't switch anybody");
            return;
        };
        self.rotate(&[first, second]);
        let text = format!("switched {} and {}", self.name(first), self.name(second));
        self.log.record(actor, text);
    }

    /// Passes every unshielded card except the actor's one seat along,
    /// in seating order or reversed.
    fn village_idiot(&mut self, actor: usize) {
        let mut ring: Vec<usize> = (0..self.player_count())
            .filter(|seat| *seat != actor && !self.shielded.contains(seat))
            .collect();
        if self.rng.bool(VILLAGE_IDIOT_REVERSE_CHANCE) {
            ring.reverse();
        }
        if self.rng.bool(VILLAGE_IDIOT_SKIP_CHANCE) || ring.len() < 2 {
            self.log.record(actor, "didn't rotate anyone");
            return;
        }
        let path = ring
            .iter()
            .chain(ring.first())
            .map(|&seat| self.name(seat))
            .collect::<Vec<_>>()
            .join(" -> ");
        self.rotate(&ring);
        self.log.record(actor, format!("rotated {path}"));
    }

    /// The drunk swaps with a center card blind; the fool first sees the
    /// two center cards it will not take.
    fn drunk(&mut self, actor: usize, sees_others: bool) {
        let index = self.pick_center(&[]);
        if sees_others {
            for other in (0..CENTER_CARDS).filter(|other| *other != index) {
                self.log_center_look(actor, other);
            }
        }
        if self.shielded.contains(&actor) {
            self.log.record(actor, "did nothing, because they were shielded");
            return;
        }
        let slot = self.center(index);
        let during = format!("took middle card {}", index + 1);
        let after = format!("{during} which was {}", self.kind_at(slot));
        self.log.record_split(actor, during, after);
        self.rotate(&[actor, slot]);
    }

    fn insomniac(&mut self, actor: usize) {
        if self.shielded.contains(&actor) {
            self.log.record(
                actor,
                "did not see their role, because they were shielded",
            );
            return;
        }
        let text = format!(
            "{} ended the night as {}",
            self.name(actor),
            self.kind_at(actor)
        );
        self.log.tell(actor, text);
    }

    fn revealer(&mut self, actor: usize) {
        let mut excluded = self.with_shielded(&[actor]);
        excluded.extend(&self.revealed);
        let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng) else {
            self.log.record(actor, "had no one to reveal");
            return;
        };
        let seen = self.kind_at(target);
        if seen.in_category(SUSPICIOUS) {
            let text = format!(
                "looked at {} and saw {seen}, so did not reveal",
                self.name(target)
            );
            self.log.record(actor, text);
            return;
        }
        self.revealed.push(target);
        let during = format!("{} was revealed to be {seen}", self.name(target));
        let after = format!(
            "{} revealed {} to be {seen}",
            self.name(actor),
            self.name(target)
        );
        self.log.broadcast(during, after);
    }

    /// Gives one unmarked, unshielded player a random mark. Only the
    /// marked player learns which mark it is.
    fn curator(&mut self, actor: usize) {
        let mut excluded = self.with_shielded(&[actor]);
        excluded.extend(self.marked.keys());
        let Some(target) = select_target(self.player_count(), &[&excluded], &mut self.rng) else {
            self.log.record(actor, "had no one to mark");
            return;
        };
        let mark = MARKS[self.rng.pick_index(MARKS.len())];
        self.marked.insert(target, mark);

        let curator = self.name(actor).to_string();
        let marked = self.name(target).to_string();
        self.log.tell(actor, format!("{curator} gave {marked} a mark"));
        self.log.tell(target, format!("{marked} received {mark}"));
        for seat in (0..self.player_count()).filter(|seat| *seat != actor && *seat != target) {
            self.log.tell(seat, format!("{marked} received a mark"));
        }
        self.log.append_shared(format!("{curator} gave {marked} {mark}"));
    }

    /// Hands the whole shared log to the actor, then pulls the actor's
    /// own card back from wherever it ended up.
    fn reclaim(&mut self, actor: usize, card: CardId) {
        let kind = self.cards[card.0].kind;
        let lines: Vec<String> = self
            .log
            .shared()
            .iter()
            .map(|line| format!("[{kind}] {line}"))
            .collect();
        for line in lines {
            self.log.tell(actor, line);
        }

        for seat in (0..self.player_count()).filter(|seat| *seat != actor) {
            if self.layout[seat] == card {
                let text = format!("took their original role back from {}", self.name(seat));
                self.log.record(actor, text);
                self.rotate(&[seat, actor]);
            }
        }
        for index in 0..CENTER_CARDS {
            let slot = self.center(index);
            if self.layout[slot] == card {
                self.log.record(
                    actor,
                    format!("took their original role back from middle card {}", index + 1),
                );
                self.rotate(&[slot, actor]);
            }
        }
        let wolf_slot = self.wolf_slot();
        if self.layout[wolf_slot] == card {
            self.log.record(actor, "took their original role back from the wolf-card");
            self.rotate(&[wolf_slot, actor]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fixed;
    use super::*;
    use crate::types::RoleKind::*;

    fn private(night: &Night, seat: usize) -> Vec<String> {
        night.log.private(seat).to_vec()
    }

    #[test]
    fn sentinel_never_shields_itself_and_broadcasts() {
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[Sentinel, Villager, Villager, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            assert_eq!(night.shielded.len(), 1);
            assert_ne!(night.shielded[0], 0);
            let shielded = night.name(night.shielded[0]).to_string();
            for seat in 0..3 {
                assert_eq!(
                    private(&night, seat),
                    [format!("{shielded} was marked with a shield")]
                );
            }
        }
    }

    #[test]
    fn shielded_player_is_never_targeted() {
        for seed in 1..=200u32 {
            let mut night = fixed(
                &[Troublemaker, Villager, Seer, Robber, Villager, Villager, Villager],
                seed,
            );
            night.shielded.push(2);
            let protected = night.layout[2];
            for seat in [0, 3] {
                let card = night.dealt[seat];
                night.act(seat, card, &[]);
            }
            assert_eq!(night.layout[2], protected, "seed {seed}");
        }
    }

    #[test]
    fn copied_robber_does_not_rob_its_source() {
        for seed in 1..=200u32 {
            let mut night = fixed(
                &[Doppelganger, Robber, Villager, Seer, Werewolf, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);

            let copy = night.cards[card.0].copied.expect("doppelganger copied someone");
            let copied_kind = night.cards[copy.0].kind;
            if copied_kind != Robber {
                continue;
            }
            assert_eq!(night.cards[night.layout[1].0].kind, Robber, "seed {seed}");
            assert_eq!(night.cards[night.layout[2].0].kind, Doppelganger);
        }
    }

    #[test]
    fn doppelganger_copy_registers_belief() {
        let mut night = fixed(&[Doppelganger, Mason, Mason, Villager, Villager, Villager], 3);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        let copy = night.cards[card.0].copied.expect("copied");
        assert_eq!(night.cards[copy.0].kind, Mason);
        assert_eq!(night.players_in_category(&[Mason]), vec![1, 2, 0]);
        assert_eq!(
            private(&night, 0).last().map(String::as_str),
            Some("the masons are Alice, Bob and Cara")
        );
    }

    #[test]
    fn copied_wrap_up_roles_are_deferred() {
        let mut night = fixed(
            &[Doppelganger, Insomniac, Insomniac, Villager, Villager, Villager],
            1,
        );
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.wrap_up.len(), 1);
        assert_eq!(night.wrap_up[0].0, 0);
        assert_eq!(night.cards[night.wrap_up[0].1 .0].kind, Insomniac);
    }

    #[test]
    fn robber_swaps_and_reports_new_card() {
        let mut night = fixed(&[Robber, Werewolf, Villager, Seer, Seer, Seer], 8);
        night.shielded.push(2);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), Werewolf);
        assert_eq!(night.kind_at(1), Robber);
        assert_eq!(private(&night, 0), ["Alice stole werewolf from Bob"]);
    }

    #[test]
    fn shielded_robber_does_nothing() {
        let mut night = fixed(&[Robber, Werewolf, Villager, Seer, Seer, Seer], 8);
        night.shielded.push(0);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), Robber);
        assert_eq!(
            private(&night, 0),
            ["Alice did nothing, because they were shielded"]
        );
    }

    #[test]
    fn bandit_cycles_target_self_and_center() {
        let mut night = fixed(&[Bandit, Werewolf, Villager, Seer, Seer, Seer], 4);
        night.shielded.push(2);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), Werewolf);
        assert_eq!(night.kind_at(1), Seer);
        let centers: Vec<RoleKind> = (3..6).map(|slot| night.kind_at(slot)).collect();
        assert_eq!(centers.iter().filter(|kind| **kind == Bandit).count(), 1);
        assert!(night.log.shared()[0].ends_with("which was seer"));
    }

    #[test]
    fn troublemaker_needs_two_targets() {
        let mut night = fixed(&[Troublemaker, Villager, Werewolf, Seer, Seer, Seer], 2);
        night.shielded.push(1);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(private(&night, 0), ["Alice couldn't switch anybody"]);
        assert_eq!(night.kind_at(2), Werewolf);
    }

    #[test]
    fn troublemaker_swaps_two_others() {
        let mut night = fixed(&[Troublemaker, Villager, Werewolf, Seer, Seer, Seer], 2);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(1), Werewolf);
        assert_eq!(night.kind_at(2), Villager);
        assert_eq!(night.kind_at(0), Troublemaker);
    }

    #[test]
    fn witch_gives_away_the_card_she_saw() {
        for seed in 1..=100u32 {
            let mut night = fixed(&[Witch, Villager, Villager, Seer, Robber, Drunk], seed);
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let seen = &night.log.shared()[0];
            let given = &night.log.shared()[1];
            let kind = seen.rsplit(' ').next().expect("kind");
            assert!(given.ends_with(&format!("role {kind}")), "seed {seed}");
            let target_name = given
                .trim_start_matches("Alice gave ")
                .split(' ')
                .next()
                .expect("name");
            let target = night.players.iter().position(|name| name == target_name).expect("seat");
            assert_eq!(night.kind_at(target).name(), kind);
            assert_ne!(target, 0);
        }
    }

    #[test]
    fn witch_can_claim_evil_card_for_herself() {
        let mut claimed = false;
        for seed in 1..=200u32 {
            let mut night = fixed(&[Witch, Villager, Villager, Minion, Minion, Minion], seed);
            let card = night.dealt[0];
            night.act(0, card, &[]);
            if night.kind_at(0) == Minion {
                claimed = true;
                assert!(night.log.shared()[1].starts_with("Alice gave Alice role minion"));
            }
        }
        assert!(claimed);
    }

    #[test]
    fn pi_becomes_first_suspicious_card() {
        let mut night = fixed(&[Pi, Tanner, Tanner, Villager, Villager, Villager], 6);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        let copied = night.cards[card.0].copied.expect("became tanner");
        assert_eq!(night.cards[copied.0].kind, Tanner);
        assert_eq!(night.describe(card), "PI (tanner)");
        assert_eq!(private(&night, 0).len(), 2);
        assert_eq!(private(&night, 0)[1], "Alice became tanner");
    }

    #[test]
    fn pi_looks_at_most_twice_and_never_at_self() {
        for seed in 1..=100u32 {
            let mut night = fixed(
                &[Pi, Villager, Seer, Robber, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let looks = private(&night, 0);
            assert!((1..=2).contains(&looks.len()));
            assert!(looks.iter().all(|line| !line.contains("at Alice")));
            assert!(night.cards[card.0].copied.is_none());
        }
    }

    #[test]
    fn medium_never_repeats_a_center_card() {
        for seed in 1..=100u32 {
            let mut night = fixed(&[Medium, Villager, Villager, Seer, Robber, Drunk], seed);
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let looks = private(&night, 0);
            if looks.len() == 2 {
                assert_ne!(looks[0], looks[1], "seed {seed}");
            }
        }
    }

    #[test]
    fn mad_seer_pairs_madseer_sightings() {
        for seed in 1..=200u32 {
            let mut night = fixed(
                &[MadSeer, MadSeer, Villager, Werewolf, Seer, MadSeer, Robber],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let looks = private(&night, 0);
            assert_eq!(looks.len(), 2);
            let madseer_looks = looks.iter().filter(|line| line.ends_with("madseer")).count();
            assert!(madseer_looks == 0 || madseer_looks == 2, "seed {seed}: {looks:?}");
            let hallucinations = night
                .log
                .shared()
                .iter()
                .filter(|line| line.contains("hallucinated"))
                .count();
            assert_eq!(hallucinations, 1);
        }
    }

    #[test]
    fn village_idiot_rotates_everyone_else() {
        let mut rotated = false;
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[VillageIdiot, Seer, Robber, Witch, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let line = &private(&night, 0)[0];
            if line == "Alice didn't rotate anyone" {
                continue;
            }
            rotated = true;
            assert!(
                line == "Alice rotated Bob -> Cara -> Dan -> Bob"
                    || line == "Alice rotated Dan -> Cara -> Bob -> Dan"
            );
            assert_eq!(night.kind_at(0), VillageIdiot);
        }
        assert!(rotated);
    }

    #[test]
    fn drunk_swaps_blind_and_fool_sees_the_rest() {
        let mut night = fixed(&[Drunk, Fool, Villager, Seer, Seer, Seer], 9);
        let drunk = night.dealt[0];
        night.act(0, drunk, &[]);
        assert_eq!(night.kind_at(0), Seer);
        assert_eq!(private(&night, 0).len(), 1);

        let fool = night.dealt[1];
        night.act(1, fool, &[]);
        assert_eq!(private(&night, 1).len(), 3);
        assert!(private(&night, 1)[2].starts_with("Bob took middle card"));
    }

    #[test]
    fn insomniac_sees_final_card_privately() {
        let mut night = fixed(&[Insomniac, Robber, Villager, Seer, Seer, Seer], 1);
        night.rotate(&[0, 1]);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(private(&night, 0), ["Alice ended the night as robber"]);
        assert!(night.log.shared().is_empty());
    }

    #[test]
    fn revealer_keeps_suspicious_cards_hidden() {
        let mut night = fixed(&[Revealer, Tanner, Werewolf, Villager, Villager, Villager], 4);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert!(night.revealed.is_empty());
        assert!(private(&night, 0)[0].ends_with("so did not reveal"));
        assert!(private(&night, 1).is_empty());
    }

    #[test]
    fn revealer_broadcasts_innocent_card() {
        let mut night = fixed(&[Revealer, Seer, Seer, Villager, Villager, Villager], 4);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.revealed.len(), 1);
        let target = night.name(night.revealed[0]).to_string();
        for seat in 0..3 {
            assert_eq!(private(&night, seat), [format!("{target} was revealed to be seer")]);
        }
    }

    #[test]
    fn curator_tells_only_the_target_which_mark() {
        let mut night = fixed(&[Curator, Villager, Villager, Villager, Seer, Seer, Seer], 12);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        let (&target, &mark) = night.marked.iter().next().expect("one mark");
        assert_ne!(target, 0);
        assert!(MARKS.contains(&mark));
        let marked_name = night.name(target).to_string();
        assert_eq!(private(&night, target), [format!("{marked_name} received {mark}")]);
        for seat in (1..4).filter(|seat| *seat != target) {
            assert_eq!(private(&night, seat), [format!("{marked_name} received a mark")]);
        }
        assert_eq!(private(&night, 0), [format!("Alice gave {marked_name} a mark")]);
    }

    #[test]
    fn alpha_wolf_prefers_non_wolves() {
        for seed in 1..=100u32 {
            let mut night = fixed(&[AlphaWolf, Werewolf, Seer, Villager, Villager, Villager], seed);
            let card = night.dealt[0];
            night.act(0, card, &[]);
            assert_eq!(night.kind_at(2), Werewolf, "seed {seed}");
            assert_eq!(night.kind_at(night.wolf_slot()), Seer);
        }
    }

    #[test]
    fn god_sees_shared_log_and_takes_card_back() {
        let mut night = fixed(&[God, Robber, Villager, Seer, Seer, Seer], 2);
        night.log.append_shared("Bob stole god from Alice");
        night.rotate(&[0, 1]);
        let card = night.dealt[0];
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), God);
        assert_eq!(night.kind_at(1), Robber);
        assert_eq!(
            private(&night, 0),
            [
                "[god] Bob stole god from Alice",
                "Alice took their original role back from Bob"
            ]
        );
    }

    #[test]
    fn god_reclaims_from_center_and_wolf_card() {
        let mut night = fixed(&[God, Villager, Villager, Seer, Seer, Seer], 2);
        let card = night.dealt[0];
        let last_center = night.center(2);
        night.rotate(&[0, last_center]);
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), God);
        assert!(private(&night, 0)
            .contains(&"Alice took their original role back from middle card 3".to_string()));

        let wolf_slot = night.wolf_slot();
        night.rotate(&[0, wolf_slot]);
        night.act(0, card, &[]);
        assert_eq!(night.kind_at(0), God);
        assert_eq!(night.kind_at(wolf_slot), Werewolf);
    }

    #[test]
    fn seer_skips_self_copied_and_shielded_players() {
        let (mut player_looks, mut center_looks) = (0, 0);
        for seed in 1..=100u32 {
            let mut night = fixed(
                &[Seer, Villager, Villager, Villager, Witch, Drunk, Robber],
                seed,
            );
            night.shielded.push(2);
            let card = night.dealt[0];
            night.act(0, card, &[1]);
            let looks = private(&night, 0);
            if looks.len() == 1 {
                player_looks += 1;
                assert_eq!(looks, ["Alice looked at Dan and saw villager"], "seed {seed}");
            } else {
                center_looks += 1;
                assert_eq!(looks.len(), 2, "seed {seed}");
                assert_ne!(looks[0], looks[1], "seed {seed}");
                assert!(looks.iter().all(|line| line.starts_with("Alice looked at middle card")));
            }
        }
        assert!(player_looks > 0 && center_looks > 0);
    }

    #[test]
    fn trickster_hides_who_got_the_center_card() {
        for seed in 1..=50u32 {
            let mut night = fixed(&[Trickster, Villager, Villager, Seer, Robber, Drunk], seed);
            night.shielded.push(2);
            let card = night.dealt[0];
            night.act(0, card, &[]);

            let index = (0..3)
                .find(|&index| night.kind_at(night.center(index)) == Villager)
                .expect("villager moved to the center");
            let given = [Seer, Robber, Drunk][index];
            assert_eq!(night.kind_at(1), given, "seed {seed}");
            assert_eq!(
                private(&night, 0),
                [format!("Alice gave the player with role villager the new role {given}")]
            );
            assert_eq!(
                night.log.shared(),
                [format!("Alice gave Bob center card {} which was {given}", index + 1)]
            );
        }
    }

    #[test]
    fn mystic_wolf_prefers_non_wolves() {
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[MysticWolf, Werewolf, Seer, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            assert_eq!(private(&night, 0), ["Alice looked at Cara and saw seer"]);
        }
    }

    #[test]
    fn mystic_wolf_falls_back_to_wolves() {
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[MysticWolf, Werewolf, Werewolf, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let look = &private(&night, 0)[0];
            assert!(
                look == "Alice looked at Bob and saw werewolf"
                    || look == "Alice looked at Cara and saw werewolf",
                "seed {seed}: {look}"
            );
        }
    }

    #[test]
    fn copied_wolf_actions_avoid_the_copied_seat() {
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[MysticWolf, Werewolf, Seer, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[2]);
            assert_eq!(private(&night, 0), ["Alice looked at Bob and saw werewolf"]);

            let mut night = fixed(&[AlphaWolf, Werewolf, Seer, Villager, Villager, Villager], seed);
            let card = night.dealt[0];
            night.act(0, card, &[2]);
            assert_eq!(private(&night, 0), ["Alice turned Bob into a wolf"]);
            assert_eq!(night.kind_at(2), Seer);
        }
    }

    #[test]
    fn lovers_reveal_lists_lover_villagers_only() {
        let mut night = fixed(
            &[LoverVillager, LoverWolf, LoverVillager, Villager, Villager, Villager],
            1,
        );
        for seat in 0..3 {
            let card = night.dealt[seat];
            night.act(seat, card, &[]);
        }
        for seat in 0..3 {
            assert_eq!(private(&night, seat), ["the lovers are Alice and Cara"]);
        }
        assert!(night.log.shared().is_empty());
    }

    #[test]
    fn apprentice_seer_and_lucid_wolf_peek_at_one_center_card() {
        let centers = [Seer, Robber, Drunk];
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[ApprenticeSeer, LucidWolf, Villager, Seer, Robber, Drunk],
                seed,
            );
            for (seat, name) in [(0, "Alice"), (1, "Bob")] {
                let card = night.dealt[seat];
                night.act(seat, card, &[]);
                let looks = private(&night, seat);
                assert_eq!(looks.len(), 1);
                let prefix = format!("{name} looked at middle card ");
                let rest = looks[0].strip_prefix(&prefix).expect("center look");
                let number: usize = rest[..1].parse().expect("card number");
                assert_eq!(rest, format!("{number} and saw {}", centers[number - 1]));
            }
        }
    }

    #[test]
    fn doppelganger_chain_stops_when_everyone_was_copied() {
        for seed in 1..=20u32 {
            let mut night = fixed(
                &[Doppelganger, Doppelganger, Doppelganger, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            assert_eq!(night.describe(card), "doppelganger (doppelganger (doppelganger))");
            let log = private(&night, 0);
            assert_eq!(log.len(), 3);
            assert_eq!(log[2], "Alice had no one to copy");
        }
    }

    #[test]
    fn doppelganger_of_doppelganger_copies_someone_new() {
        let mut nested = false;
        for seed in 1..=50u32 {
            let mut night = fixed(
                &[Doppelganger, Doppelganger, Villager, Villager, Villager, Villager],
                seed,
            );
            let card = night.dealt[0];
            night.act(0, card, &[]);
            let described = night.describe(card);
            if described == "doppelganger (doppelganger (villager))" {
                nested = true;
                assert_eq!(private(&night, 0)[1], "Alice doppelganged Cara, who was villager");
            } else {
                assert_eq!(described, "doppelganger (villager)", "seed {seed}");
            }
        }
        assert!(nested);
    }
}
