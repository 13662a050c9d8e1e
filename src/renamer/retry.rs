//! Laço de tentativas com espera fixa entre falhas

use std::time::Duration;

/// Decisão tomada após uma tentativa falha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Não tentar de novo
    NoRetry,
    /// Esperar e tentar de novo
    RetryAfter(Duration),
}

/// Política de tentativas: número máximo (contando a primeira) e espera fixa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Máximo efetivo: zero é tratado como uma tentativa
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// `attempt` começa em 1 (primeira tentativa)
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.attempts() {
            RetryDecision::NoRetry
        } else {
            RetryDecision::RetryAfter(self.delay)
        }
    }
}

/// Erro da última tentativa, depois de esgotadas todas
#[derive(Debug)]
pub struct Exhausted<E> {
    pub error: E,
    pub attempts: u32,
}

/// Executa `op` até dar certo ou a política mandar parar
///
/// `on_retry(tentativa, erro, espera)` é chamado antes de cada espera.
/// Em caso de sucesso retorna o valor e o número de tentativas usadas.
pub fn run_with_retry<T, E, F, R>(
    policy: &RetryPolicy,
    mut op: F,
    mut on_retry: R,
) -> Result<(T, u32), Exhausted<E>>
where
    F: FnMut(u32) -> Result<T, E>,
    R: FnMut(u32, &E, Duration),
{
    let mut attempt = 1u32;
    loop {
        match op(attempt) {
            Ok(value) => return Ok((value, attempt)),
            Err(error) => match policy.decide(attempt) {
                RetryDecision::NoRetry => return Err(Exhausted { error, attempts: attempt }),
                RetryDecision::RetryAfter(delay) => {
                    on_retry(attempt, &error, delay);
                    std::thread::sleep(delay);
                    attempt += 1;
                }
            },
        }
    }
}
