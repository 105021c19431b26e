use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use chrono::Utc;
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use uuid::Uuid;

use crate::{
    constants::taxonomy,
    errors::{AppError, AppResult},
    models::{
        domain::{OpponentType, QuizResults, QuizSessionState, QuizSettings, QuizStage},
        dto::response::{AnswerResponse, QuizSessionView, StartQuizResponse},
    },
    services::{
        matchmaker_service::Matchmaker,
        opponent_model::{resolve_answer, Dice},
        question_service::{QuestionService, QuizParameters},
    },
};

/// Sessions nobody has looked at for this long are dropped.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);
const MAX_SWEEP_PERIOD: Duration = Duration::from_secs(60);
const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

/// One player's quiz. The state lock serializes player actions against
/// opponent answers landing in the background.
struct QuizSession {
    state: Arc<Mutex<QuizSessionState>>,
    starting: AtomicBool,
    pending: Mutex<Vec<JoinHandle<()>>>,
    last_touched: Mutex<Instant>,
}

impl QuizSession {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(QuizSessionState::new())),
            starting: AtomicBool::new(false),
            pending: Mutex::new(Vec::new()),
            last_touched: Mutex::new(Instant::now()),
        }
    }

    async fn touch(&self) {
        *self.last_touched.lock().await = Instant::now();
    }

    async fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        !self.starting.load(Ordering::Acquire)
            && now.saturating_duration_since(*self.last_touched.lock().await) >= ttl
    }

    async fn track(&self, handle: JoinHandle<()>) {
        let mut pending = self.pending.lock().await;
        pending.retain(|h| !h.is_finished());
        pending.push(handle);
    }

    async fn cancel_pending(&self) -> usize {
        let handles = std::mem::take(&mut *self.pending.lock().await);
        let live = handles.iter().filter(|h| !h.is_finished()).count();
        for handle in handles {
            handle.abort();
        }
        live
    }

    async fn settle_pending(&self) {
        let handles = std::mem::take(&mut *self.pending.lock().await);
        for handle in handles {
            if let Err(err) = handle.await {
                if !err.is_cancelled() {
                    log::error!("Opponent answer task failed: {}", err);
                }
            }
        }
    }
}

/// Clears the start flag however `start_quiz` exits.
struct StartGuard<'a>(&'a AtomicBool);

impl Drop for StartGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct QuizService {
    sessions: RwLock<HashMap<Uuid, Arc<QuizSession>>>,
    question_service: Arc<QuestionService>,
    matchmaker: Arc<Matchmaker>,
    dice: Arc<dyn Dice>,
    opponent_delay: Duration,
    idle_ttl: Duration,
}

impl QuizService {
    pub fn new(
        question_service: Arc<QuestionService>,
        matchmaker: Arc<Matchmaker>,
        dice: Arc<dyn Dice>,
        opponent_delay: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            question_service,
            matchmaker,
            dice,
            opponent_delay,
            idle_ttl: DEFAULT_SESSION_IDLE_TTL,
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    /// Looks a session up and marks it as used.
    async fn session(&self, id: &Uuid) -> AppResult<Arc<QuizSession>> {
        let session = self
            .sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", id)))?;
        session.touch().await;
        Ok(session)
    }

    pub async fn create_session(&self) -> QuizSessionView {
        let id = Uuid::new_v4();
        let session = Arc::new(QuizSession::new());
        let view = QuizSessionView::from_state(id, &*session.state.lock().await);

        self.sessions.write().await.insert(id, session);
        log::info!("Created quiz session {}", id);
        view
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<QuizSessionView> {
        let session = self.session(id).await?;
        let state = session.state.lock().await;
        Ok(QuizSessionView::from_state(*id, &state))
    }

    /// Validates the chosen category, then runs matchmaking and question
    /// loading concurrently before entering battle.
    pub async fn start_quiz(
        &self,
        id: &Uuid,
        settings: QuizSettings,
    ) -> AppResult<StartQuizResponse> {
        let session = self.session(id).await?;

        taxonomy::validate_path(&settings.domain, &settings.subject, &settings.topic)?;
        if settings.opponent_type != OpponentType::Ai {
            return Err(AppError::ValidationError(
                "Only AI opponents are available".to_string(),
            ));
        }

        session.state.lock().await.ensure_stage(QuizStage::Lobby, "start a quiz")?;

        if session.starting.swap(true, Ordering::AcqRel) {
            return Err(AppError::InvalidState(
                "Quiz is already being started".to_string(),
            ));
        }
        let _guard = StartGuard(&session.starting);

        // The quiz clock includes matchmaking and question loading.
        let started_at = Utc::now();
        let params = QuizParameters::from(&settings);
        let (matched, question_set) = tokio::join!(
            self.matchmaker
                .find_opponent(settings.opponent_type, settings.difficulty),
            self.question_service.get_questions(&params)
        );
        let matched = matched?;

        let mut state = session.state.lock().await;
        let count = question_set.questions.len();
        state.begin(settings, question_set.questions, matched.opponent, started_at)?;

        log::info!(
            "Session {} started: {} {:?} questions against {}",
            id,
            count,
            question_set.origin,
            matched.match_id
        );

        Ok(StartQuizResponse {
            session: QuizSessionView::from_state(*id, &state),
            match_id: matched.match_id,
            question_origin: question_set.origin,
            message: format!("{} questions loaded successfully!", count),
        })
    }

    /// Scores the player's answer and schedules the opponent's answer for
    /// the same question. `None` records a timeout.
    pub async fn answer_question(
        &self,
        id: &Uuid,
        option_id: Option<String>,
    ) -> AppResult<AnswerResponse> {
        let session = self.session(id).await?;

        let (verdict, view, epoch, difficulty, skill_level) = {
            let mut state = session.state.lock().await;
            let verdict = state.answer(option_id.as_deref())?;
            let difficulty = state
                .settings
                .as_ref()
                .map(|s| s.difficulty)
                .ok_or_else(|| AppError::InternalError("Battle without settings".to_string()))?;
            let skill_level = state
                .opponent
                .as_ref()
                .map(|o| o.skill_level)
                .ok_or_else(|| AppError::InternalError("Battle without opponent".to_string()))?;
            let view = QuizSessionView::from_state(*id, &state);
            (verdict, view, state.epoch, difficulty, skill_level)
        };

        let state = Arc::clone(&session.state);
        let dice = Arc::clone(&self.dice);
        let delay = self.opponent_delay;
        let player_correct = verdict.correct;
        let session_id = *id;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let correct = resolve_answer(dice.as_ref(), difficulty, skill_level, player_correct);
            let mut state = state.lock().await;
            if state.apply_opponent_answer(epoch, correct) {
                log::debug!("Opponent scored in session {}", session_id);
            }
        });
        session.track(handle).await;

        Ok(AnswerResponse {
            verdict,
            session: view,
        })
    }

    pub async fn next_question(&self, id: &Uuid) -> AppResult<QuizSessionView> {
        let session = self.session(id).await?;
        let mut state = session.state.lock().await;

        if state.advance(Utc::now())? == QuizStage::Results {
            log::info!(
                "Session {} finished {}-{}",
                id,
                state.player_score,
                state.opponent_score
            );
        }

        Ok(QuizSessionView::from_state(*id, &state))
    }

    /// Back to the lobby. Opponent answers still in flight are dropped.
    pub async fn reset_quiz(&self, id: &Uuid) -> AppResult<QuizSessionView> {
        let session = self.session(id).await?;

        let cancelled = session.cancel_pending().await;
        let mut state = session.state.lock().await;
        state.reset();

        log::info!("Session {} reset ({} opponent answers cancelled)", id, cancelled);
        Ok(QuizSessionView::from_state(*id, &state))
    }

    /// Waits for opponent answers still in flight so the final score is
    /// complete.
    pub async fn results(&self, id: &Uuid) -> AppResult<QuizResults> {
        let session = self.session(id).await?;
        session.settle_pending().await;

        let state = session.state.lock().await;
        state.results()
    }

    pub async fn end_session(&self, id: &Uuid) -> AppResult<()> {
        let session = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", id)))?;

        session.cancel_pending().await;
        log::info!("Ended quiz session {}", id);
        Ok(())
    }

    /// Drops every session idle for at least the configured TTL, cancelling
    /// its pending opponent answers. Returns how many were dropped.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();

        let mut candidates = Vec::new();
        for (id, session) in self.sessions.read().await.iter() {
            if session.is_idle(now, self.idle_ttl).await {
                candidates.push(*id);
            }
        }
        if candidates.is_empty() {
            return 0;
        }

        let mut evicted = Vec::new();
        {
            let mut sessions = self.sessions.write().await;
            for id in candidates {
                let still_idle = match sessions.get(&id) {
                    Some(session) => session.is_idle(now, self.idle_ttl).await,
                    None => false,
                };
                if still_idle {
                    if let Some(session) = sessions.remove(&id) {
                        evicted.push(session);
                    }
                }
            }
        }

        for session in &evicted {
            session.cancel_pending().await;
        }
        if !evicted.is_empty() {
            log::info!("Evicted {} idle quiz sessions", evicted.len());
        }
        evicted.len()
    }

    /// Runs `evict_idle` periodically until the service is dropped.
    pub fn spawn_idle_sweeper(self: &Arc<Self>) -> JoinHandle<()> {
        let service = Arc::downgrade(self);
        let period = self.idle_ttl.clamp(MIN_SWEEP_PERIOD, MAX_SWEEP_PERIOD);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let Some(live) = service.upgrade() else {
                    break;
                };
                live.evict_idle().await;
            }
        })
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
