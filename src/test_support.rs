#![cfg(test)]

use crate::config::CONFIG_PATH_ENV;
use crate::prompt::Prompt;
use crate::runner::{CommandOutput, CommandRunner, Invocation};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::env;
use std::ffi::OsString;
use std::io;
use std::path::Path;

impl CommandOutput {
    pub fn ok(stdout: &str) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }
}

type Handler = Box<dyn Fn(&Invocation) -> io::Result<CommandOutput>>;

/// Answers every invocation from a closure and records what was run.
pub struct ScriptedRunner {
    handler: Handler,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new(handler: impl Fn(&Invocation) -> CommandOutput + 'static) -> Self {
        Self {
            handler: Box::new(move |invocation| Ok(handler(invocation))),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Every invocation fails as if the program were not installed.
    pub fn failing_spawn() -> Self {
        Self {
            handler: Box::new(|invocation| {
                Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} not found", invocation.program),
                ))
            }),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Invocations whose first argument is `flag` (e.g. `-s` for duti writes).
    pub fn calls_with_flag(&self, flag: &str) -> Vec<Invocation> {
        self.calls
            .borrow()
            .iter()
            .filter(|invocation| invocation.args.first().map(String::as_str) == Some(flag))
            .cloned()
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        (self.handler)(invocation)
    }
}

/// Canned answers, consumed in order. Running out of answers fails the test.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub messages: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            messages: Vec::new(),
        }
    }

    /// A prompt that must never be asked anything.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> anyhow::Result<bool> {
        self.messages.push(message.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => panic!("unexpected prompt: {message}"),
        }
    }
}

/// `duti -x` output naming `bundle_id` as the owner.
pub fn owner_output(bundle_id: &str) -> String {
    format!("App.app\n/Applications/App.app\n{bundle_id}\n")
}

pub struct ConfigEnvGuard {
    original: Option<OsString>,
}

impl ConfigEnvGuard {
    const KEY: &'static str = CONFIG_PATH_ENV;

    pub fn set(path: &Path) -> Self {
        let original = env::var_os(Self::KEY);
        env::set_var(Self::KEY, path);
        Self { original }
    }

    pub fn unset() -> Self {
        let original = env::var_os(Self::KEY);
        env::remove_var(Self::KEY);
        Self { original }
    }
}

impl Drop for ConfigEnvGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            env::set_var(Self::KEY, original);
        } else {
            env::remove_var(Self::KEY);
        }
    }
}
