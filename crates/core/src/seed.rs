//! Synthetic sample tickets for new sessions.

use chrono::Days;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::SeedConfig;
use crate::ticket::{Ticket, TicketId, TicketPriority, TicketStatus};

/// Canned issue descriptions the generator draws from.
pub const ISSUE_CATALOG: [&str; 20] = [
    "사무실 네트워크 연결 문제",
    "소프트웨어 실행 시 충돌 발생",
    "프린터 응답 없음",
    "이메일 서버 다운",
    "데이터 백업 실패",
    "로그인 인증 문제",
    "웹사이트 속도 저하",
    "보안 취약점 발견",
    "서버 하드웨어 오류",
    "공유폴더 접근 불가",
    "데이터베이스 연결 실패",
    "모바일 앱 동기화 오류",
    "VoIP 전화 시스템 문제",
    "원격 근무자 VPN 접속 문제",
    "시스템 업데이트 호환성 문제",
    "파일 서버 저장공간 부족",
    "침입 탐지 시스템 경고",
    "재고관리 시스템 오류",
    "CRM 고객 데이터 로딩 실패",
    "협업툴 알림 전송 안 됨",
];

/// Generates the initial ticket table of a session.
///
/// The RNG is owned by the generator and seeded from the config, so two
/// generators built from the same config produce identical tables.
pub struct SeedGenerator {
    config: SeedConfig,
    rng: StdRng,
}

impl SeedGenerator {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            config: config.clone(),
            rng: StdRng::seed_from_u64(config.rng_seed),
        }
    }

    /// Produce `ticket_count` tickets, highest id first.
    pub fn generate(&mut self) -> Vec<Ticket> {
        if self.config.ticket_count == 0 {
            return Vec::new();
        }
        let first = self.config.first_id;
        let last = first.saturating_add(self.config.ticket_count - 1);

        (first..=last)
            .rev()
            .map(|number| self.ticket(TicketId::new(number)))
            .collect()
    }

    fn ticket(&mut self, id: TicketId) -> Ticket {
        let issue = ISSUE_CATALOG[self.rng.gen_range(0..ISSUE_CATALOG.len())];
        let status = TicketStatus::ALL[self.rng.gen_range(0..TicketStatus::ALL.len())];
        let priority = TicketPriority::ALL[self.rng.gen_range(0..TicketPriority::ALL.len())];
        let offset = self.rng.gen_range(0..self.config.window_days.max(1));
        let start = self.config.window_start;

        Ticket {
            id,
            issue: issue.to_string(),
            status,
            priority,
            date_submitted: start
                .checked_add_days(Days::new(u64::from(offset)))
                .unwrap_or(start),
        }
    }
}
