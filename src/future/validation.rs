//! Asynchronous combinators for [`Validation`].

use std::future::Future;

use crate::validation::{Faults, Validation};

impl<T, E> Validation<T, E> {
    /// Awaits `function` on the valid value.
    pub async fn map_async<U, F, Fut>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Self::Valid(value) => Validation::Valid(function(value).await),
            Self::Invalid(faults) => Validation::Invalid(faults),
        }
    }

    /// Awaits a dependent validation; short-circuits on `Invalid`.
    pub async fn and_then_async<U, F, Fut>(self, function: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Validation<U, E>>,
    {
        match self {
            Self::Valid(value) => function(value).await,
            Self::Invalid(faults) => Validation::Invalid(faults),
        }
    }

    /// Awaits an asynchronous check of the valid value, turning it into
    /// `Invalid(error)` when the check fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcomes::Validation;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let taken = ["ada", "grace"];
    /// let checked = Validation::<&str, &str>::valid("ada")
    ///     .ensure_async(|name| { let name = *name; async move { !taken.contains(&name) } }, "name taken")
    ///     .await;
    /// assert_eq!(checked, Validation::invalid("name taken"));
    /// # });
    /// ```
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self {
            Self::Valid(value) => {
                if predicate(&value).await {
                    Self::Valid(value)
                } else {
                    Self::Invalid(Faults::single(error))
                }
            }
            Self::Invalid(faults) => Self::Invalid(faults),
        }
    }
}

/// Awaits every future in order and accumulates all faults.
///
/// Unlike [`crate::future::outcome::combine_all_async`], every future is
/// awaited even after a fault has been seen.
///
/// # Examples
///
/// ```rust
/// use outcomes::Validation;
/// use outcomes::future::validation::combine_all_async;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let checks = ["", "ok", ""].map(|field| async move {
///     if field.is_empty() { Validation::invalid("empty") } else { Validation::valid(field.len()) }
/// });
/// let combined = combine_all_async(checks).await;
/// assert_eq!(combined.unwrap_errors().len(), 2);
/// # });
/// ```
pub async fn combine_all_async<T, E, I>(futures: I) -> Validation<Vec<T>, E>
where
    I: IntoIterator,
    I::Item: Future<Output = Validation<T, E>>,
{
    let futures = futures.into_iter();
    let mut values = Vec::with_capacity(futures.size_hint().0);
    let mut accumulated: Option<Faults<E>> = None;
    for future in futures {
        match future.await {
            Validation::Valid(value) => values.push(value),
            Validation::Invalid(faults) => {
                accumulated = Some(match accumulated {
                    Some(previous) => previous.append(faults),
                    None => faults,
                });
            }
        }
    }
    match accumulated {
        Some(faults) => Validation::Invalid(faults),
        None => Validation::Valid(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_combine_all_async_keeps_fault_order() {
        let checks = [1, -2, 3, -4].map(|n| async move {
            if n > 0 { Validation::valid(n) } else { Validation::invalid(n) }
        });
        let combined = combine_all_async(checks).await;
        assert_eq!(combined.unwrap_errors().into_vec(), vec![-2, -4]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_and_then_async_short_circuits() {
        let result: Validation<i32, &str> = Validation::<i32, &str>::invalid("first")
            .and_then_async(|_| async { Validation::invalid("second") })
            .await;
        assert_eq!(result.unwrap_errors().into_vec(), vec!["first"]);
    }

    #[rstest]
    #[tokio::test]
    async fn test_map_async_transforms_valid() {
        let result = Validation::<i32, String>::valid(4).map_async(|x| async move { x * x }).await;
        assert_eq!(result, Validation::valid(16));
    }
}
