//! 로딩 상태 플래그
//!
//! 컨트롤마다 진행 중인 작업은 최대 하나입니다. [`LoadingFlag::try_begin`]이 돌려주는
//! [`LoadingGuard`]가 살아 있는 동안 플래그가 올라가 있고, guard가 drop되면
//! 성공/실패와 관계없이 내려갑니다.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 컨트롤의 로딩(비활성화) 상태
///
/// 복제본은 같은 상태를 공유하므로 UI나 테스트가 작업 도중 상태를 관찰할 수 있습니다.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// 플래그를 올리고 guard를 돌려줍니다.
    ///
    /// 이미 진행 중인 작업이 있으면 `None`을 돌려줍니다.
    pub fn try_begin(&self) -> Option<LoadingGuard> {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| LoadingGuard(self.0.clone()))
    }
}

/// drop 시 로딩 플래그를 내리는 guard
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lowers_flag_on_drop() {
        let flag = LoadingFlag::new();
        assert!(!flag.is_loading());

        let guard = flag.try_begin().unwrap();
        assert!(flag.is_loading());
        assert!(flag.clone().is_loading());

        drop(guard);
        assert!(!flag.is_loading());
    }

    #[test]
    fn test_second_begin_is_refused_while_in_flight() {
        let flag = LoadingFlag::new();
        let _guard = flag.try_begin().unwrap();

        assert!(flag.try_begin().is_none());
    }
}
