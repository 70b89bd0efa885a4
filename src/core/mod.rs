// Core Layer - 스케줄링과 애니메이션 상태 기계
pub mod actions;
pub mod counter;
pub mod feedback;
pub mod scheduler;
pub mod typing;

pub use counter::CounterAnimation;
pub use feedback::SubmitFeedback;
pub use scheduler::Scheduler;
pub use typing::TypingAnimator;
