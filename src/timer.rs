//! Cuenta atrás por pregunta.
//!
//! Cada `Countdown` va ligado a una pregunta (`key`). No tiene reloj propio:
//! quien lo posee le pasa segundos enteros (`tick`) o tiempo transcurrido
//! (`elapse`). Al llegar a cero devuelve `Expired` una única vez y se detiene.

/// Evento de expiración; lleva la pregunta a la que pertenecía el timer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expired {
    pub key: String,
}

#[derive(Clone, Debug)]
pub struct Countdown {
    key: String,
    duration: u32,
    time_left: u32,
    warning_threshold: u32,
    warning: bool,
    fired: bool,
    cancelled: bool,
    carry: f64, // fracción de segundo acumulada
}

impl Countdown {
    pub fn new(key: impl Into<String>, duration: u32, warning_threshold: u32) -> Self {
        Self {
            key: key.into(),
            duration,
            time_left: duration,
            warning_threshold,
            warning: false,
            fired: false,
            cancelled: false,
            carry: 0.0,
        }
    }

    /// Rearma el timer para otra pregunta.
    pub fn rearm(&mut self, key: impl Into<String>, duration: u32) {
        *self = Self::new(key, duration, self.warning_threshold);
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_warning(&self) -> bool {
        self.warning
    }

    pub fn is_running(&self) -> bool {
        !self.fired && !self.cancelled
    }

    /// Fracción restante (0.0..=1.0) para la barra de progreso.
    pub fn fraction_left(&self) -> f32 {
        if self.duration == 0 {
            return 0.0;
        }
        self.time_left as f32 / self.duration as f32
    }

    /// Un segundo.
    pub fn tick(&mut self) -> Option<Expired> {
        if !self.is_running() {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left <= self.warning_threshold {
            self.warning = true;
        }
        if self.time_left == 0 {
            self.fired = true;
            log::debug!("Timer for question {} expired", self.key);
            return Some(Expired {
                key: self.key.clone(),
            });
        }
        None
    }

    /// Avanza `dt` segundos reales, emitiendo un tick por segundo completo.
    pub fn elapse(&mut self, dt: f64) -> Option<Expired> {
        if !self.is_running() || dt <= 0.0 {
            return None;
        }
        self.carry += dt;
        while self.carry >= 1.0 {
            self.carry -= 1.0;
            if let Some(expired) = self.tick() {
                self.carry = 0.0;
                return Some(expired);
            }
        }
        None
    }
}
