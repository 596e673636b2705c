// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// One-time setup token.
///
/// The application owns a single guard for its lifetime and hands it to every
/// playlist initialisation, tests create their own.
#[derive(Debug, Default)]
pub(crate) struct SetupGuard {
    done: bool,
}

impl SetupGuard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Runs `setup` unless a previous call already did, returning whether it
    /// ran.
    pub(crate) fn run_once(&mut self, setup: impl FnOnce()) -> bool {
        if self.done {
            return false;
        }

        setup();
        self.done = true;
        true
    }

    #[cfg(test)]
    pub(crate) fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_setup_once() {
        let mut guard = SetupGuard::new();
        let mut calls = 0;

        assert!(guard.run_once(|| calls += 1));
        assert!(!guard.run_once(|| calls += 1));

        assert_eq!(calls, 1);
        assert!(guard.is_done());
    }

    #[test]
    fn separate_guards_do_not_share_state() {
        let mut first = SetupGuard::new();
        first.run_once(|| {});

        assert!(!SetupGuard::new().is_done());
    }
}
