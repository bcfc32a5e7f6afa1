//! Static callback registration table.
//!
//! One entry per recognized callback kind. A registrar inspects its
//! configuration slot and, when the slot is set, produces the bridge handler
//! that decodes the payload and forwards it to the caller's closure. The two
//! kinds that owe the widget a value (price formatting, tooltip content)
//! resolve the promise with it; decode failures are logged and reject the
//! promise.

use std::rc::Rc;

use seatview_core::config::{
    HoldCallback, NotifyCallback, ObjectCallback, ObjectTicketTypeCallback,
};
use seatview_core::{decode, BridgeHandler, ChartConfig, DecodeError, SeatingChart};
use serde_json::{json, Value};

/// One recognized callback kind.
pub(crate) struct CallbackSpec {
    /// Bridge message name; also the generated stub's field name.
    pub name: &'static str,
    /// Produces the bridge handler when the configuration slot is set.
    pub registrar: fn(&Rc<ChartConfig>, &SeatingChart) -> Option<BridgeHandler>,
}

/// The 16 recognized callbacks.
pub(crate) const CALLBACKS: &[CallbackSpec] = &[
    CallbackSpec {
        name: "priceFormatter",
        registrar: price_formatter,
    },
    CallbackSpec {
        name: "onSelectionValid",
        registrar: on_selection_valid,
    },
    CallbackSpec {
        name: "onSelectionInvalid",
        registrar: on_selection_invalid,
    },
    CallbackSpec {
        name: "onObjectSelected",
        registrar: on_object_selected,
    },
    CallbackSpec {
        name: "onObjectDeselected",
        registrar: on_object_deselected,
    },
    CallbackSpec {
        name: "onObjectClicked",
        registrar: on_object_clicked,
    },
    CallbackSpec {
        name: "onBestAvailableSelected",
        registrar: on_best_available_selected,
    },
    CallbackSpec {
        name: "onBestAvailableSelectionFailed",
        registrar: on_best_available_selection_failed,
    },
    CallbackSpec {
        name: "onHoldSucceeded",
        registrar: on_hold_succeeded,
    },
    CallbackSpec {
        name: "onHoldFailed",
        registrar: on_hold_failed,
    },
    CallbackSpec {
        name: "onReleaseHoldSucceeded",
        registrar: on_release_hold_succeeded,
    },
    CallbackSpec {
        name: "onReleaseHoldFailed",
        registrar: on_release_hold_failed,
    },
    CallbackSpec {
        name: "onSelectedObjectBooked",
        registrar: on_selected_object_booked,
    },
    CallbackSpec {
        name: "tooltipInfo",
        registrar: tooltip_info,
    },
    CallbackSpec {
        name: "onChartRendered",
        registrar: on_chart_rendered,
    },
    CallbackSpec {
        name: "onChartRenderingFailed",
        registrar: on_chart_rendering_failed,
    },
];

/// Log a decode failure and turn it into a promise rejection.
fn reject(name: &'static str) -> impl Fn(DecodeError) -> String {
    move |e| {
        log::error!("{name}: failed to decode payload: {e}");
        e.to_string()
    }
}

// ---------------------------------------------------------------------------
// Shared handler shapes
// ---------------------------------------------------------------------------

fn notify_handler(
    config: &Rc<ChartConfig>,
    slot: fn(&ChartConfig) -> Option<&NotifyCallback>,
) -> Option<BridgeHandler> {
    slot(config)?;
    let config = Rc::clone(config);
    Some(Box::new(move |_args| {
        if let Some(callback) = slot(&config) {
            callback();
        }
        Ok(Value::Null)
    }))
}

fn object_handler(
    config: &Rc<ChartConfig>,
    name: &'static str,
    slot: fn(&ChartConfig) -> Option<&ObjectCallback>,
) -> Option<BridgeHandler> {
    slot(config)?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        if let Some(callback) = slot(&config) {
            let object = decode::object(args, 0).map_err(reject(name))?;
            callback(object);
        }
        Ok(Value::Null)
    }))
}

fn object_ticket_type_handler(
    config: &Rc<ChartConfig>,
    name: &'static str,
    slot: fn(&ChartConfig) -> Option<&ObjectTicketTypeCallback>,
) -> Option<BridgeHandler> {
    slot(config)?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        if let Some(callback) = slot(&config) {
            let object = decode::object(args, 0).map_err(reject(name))?;
            let ticket_type = decode::ticket_type(args, 1).map_err(reject(name))?;
            callback(object, ticket_type);
        }
        Ok(Value::Null)
    }))
}

fn hold_handler(
    config: &Rc<ChartConfig>,
    name: &'static str,
    slot: fn(&ChartConfig) -> Option<&HoldCallback>,
) -> Option<BridgeHandler> {
    slot(config)?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        if let Some(callback) = slot(&config) {
            let objects = decode::objects(args, 0).map_err(reject(name))?;
            let ticket_types = decode::ticket_types(args, 1);
            callback(objects, ticket_types);
        }
        Ok(Value::Null)
    }))
}

// ---------------------------------------------------------------------------
// Registrars
// ---------------------------------------------------------------------------

fn price_formatter(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    config.price_formatter.as_ref()?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        let Some(format) = &config.price_formatter else {
            return Ok(Value::Null);
        };
        let price = decode::float(args, 0).map_err(reject("priceFormatter"))?;
        Ok(json!(format(price)))
    }))
}

fn on_selection_valid(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    notify_handler(config, |c| c.on_selection_valid.as_ref())
}

fn on_selection_invalid(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    config.on_selection_invalid.as_ref()?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        if let Some(callback) = &config.on_selection_invalid {
            let reasons = decode::validators(args, 0).map_err(reject("onSelectionInvalid"))?;
            callback(reasons);
        }
        Ok(Value::Null)
    }))
}

fn on_object_selected(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    object_ticket_type_handler(config, "onObjectSelected", |c| c.on_object_selected.as_ref())
}

fn on_object_deselected(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    object_ticket_type_handler(config, "onObjectDeselected", |c| {
        c.on_object_deselected.as_ref()
    })
}

fn on_object_clicked(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    object_handler(config, "onObjectClicked", |c| c.on_object_clicked.as_ref())
}

fn on_best_available_selected(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    config.on_best_available_selected.as_ref()?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        if let Some(callback) = &config.on_best_available_selected {
            let objects = decode::objects(args, 0).map_err(reject("onBestAvailableSelected"))?;
            let fully_selected =
                decode::boolean(args, 1).map_err(reject("onBestAvailableSelected"))?;
            callback(objects, fully_selected);
        }
        Ok(Value::Null)
    }))
}

fn on_best_available_selection_failed(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    notify_handler(config, |c| c.on_best_available_selection_failed.as_ref())
}

fn on_hold_succeeded(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    hold_handler(config, "onHoldSucceeded", |c| c.on_hold_succeeded.as_ref())
}

fn on_hold_failed(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    hold_handler(config, "onHoldFailed", |c| c.on_hold_failed.as_ref())
}

fn on_release_hold_succeeded(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    hold_handler(config, "onReleaseHoldSucceeded", |c| {
        c.on_release_hold_succeeded.as_ref()
    })
}

fn on_release_hold_failed(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    hold_handler(config, "onReleaseHoldFailed", |c| {
        c.on_release_hold_failed.as_ref()
    })
}

fn on_selected_object_booked(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    object_handler(config, "onSelectedObjectBooked", |c| {
        c.on_selected_object_booked.as_ref()
    })
}

fn tooltip_info(config: &Rc<ChartConfig>, _chart: &SeatingChart) -> Option<BridgeHandler> {
    config.tooltip_info.as_ref()?;
    let config = Rc::clone(config);
    Some(Box::new(move |args| {
        let Some(provider) = &config.tooltip_info else {
            return Ok(Value::Null);
        };
        let object = decode::object(args, 0).map_err(reject("tooltipInfo"))?;
        Ok(Value::String(provider(object)))
    }))
}

fn on_chart_rendered(config: &Rc<ChartConfig>, chart: &SeatingChart) -> Option<BridgeHandler> {
    config.on_chart_rendered.as_ref()?;
    let config = Rc::clone(config);
    let chart = chart.clone();
    Some(Box::new(move |_args| {
        if let Some(callback) = &config.on_chart_rendered {
            callback(chart.clone());
        }
        Ok(Value::Null)
    }))
}

fn on_chart_rendering_failed(
    config: &Rc<ChartConfig>,
    _chart: &SeatingChart,
) -> Option<BridgeHandler> {
    notify_handler(config, |c| c.on_chart_rendering_failed.as_ref())
}
